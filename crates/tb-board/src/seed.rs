//! Starter data for an empty or demo board.

use crate::{BoardContext, Result as BoardErrorResult};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::info;
use tb_auth::AuthUser;
use tb_core::{Priority, Project, ProjectColor, ProjectIcon, Status, Task, TaskDraft};
use tb_store::{BatchOp, PROJECTS, TASKS};

const CONFIRM_PROMPT: &str = "Replace all tasks and projects with the starter data?";

/// What a completed seed wrote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub tasks: usize,
}

struct StarterProject {
    id: &'static str,
    name: &'static str,
    color: ProjectColor,
    icon: ProjectIcon,
}

const STARTER_PROJECTS: [StarterProject; 6] = [
    StarterProject {
        id: "support-bot",
        name: "Support Bot",
        color: ProjectColor::Orange,
        icon: ProjectIcon::Bot,
    },
    StarterProject {
        id: "atlas-api",
        name: "Atlas API",
        color: ProjectColor::Blue,
        icon: ProjectIcon::ShieldCheck,
    },
    StarterProject {
        id: "atlas-web",
        name: "Atlas Web",
        color: ProjectColor::Sky,
        icon: ProjectIcon::Monitor,
    },
    StarterProject {
        id: "pet-care",
        name: "Pet Care",
        color: ProjectColor::Green,
        icon: ProjectIcon::PawPrint,
    },
    StarterProject {
        id: "facilities",
        name: "Facilities",
        color: ProjectColor::Red,
        icon: ProjectIcon::Building2,
    },
    StarterProject {
        id: "research-ai",
        name: "Research AI",
        color: ProjectColor::Purple,
        icon: ProjectIcon::Brain,
    },
];

struct StarterTask {
    project: &'static str,
    title: &'static str,
    description: Option<&'static str>,
    status: Status,
    priority: Priority,
    /// Target date as an offset from today; negative is overdue
    days_out: Option<i64>,
}

const STARTER_TASKS: [StarterTask; 20] = [
    StarterTask {
        project: "support-bot",
        title: "Triage duplicate ticket alerts",
        description: Some("The same outage currently opens one ticket per affected user."),
        status: Status::Backlog,
        priority: Priority::Medium,
        days_out: None,
    },
    StarterTask {
        project: "support-bot",
        title: "Improve intent detection for refunds",
        description: None,
        status: Status::Todo,
        priority: Priority::High,
        days_out: Some(2),
    },
    StarterTask {
        project: "support-bot",
        title: "Add handoff to a human agent",
        description: Some("Escalate after two failed answers instead of looping."),
        status: Status::InProgress,
        priority: Priority::Critical,
        days_out: Some(1),
    },
    StarterTask {
        project: "support-bot",
        title: "Log unanswered questions",
        description: None,
        status: Status::Done,
        priority: Priority::Low,
        days_out: Some(-3),
    },
    StarterTask {
        project: "support-bot",
        title: "Weekly transcript review",
        description: None,
        status: Status::Backlog,
        priority: Priority::Low,
        days_out: None,
    },
    StarterTask {
        project: "atlas-api",
        title: "Rate-limit public endpoints",
        description: None,
        status: Status::InProgress,
        priority: Priority::High,
        days_out: Some(4),
    },
    StarterTask {
        project: "atlas-api",
        title: "Rotate signing keys",
        description: Some("Current keys pass the one-year mark this month."),
        status: Status::Todo,
        priority: Priority::Critical,
        days_out: Some(1),
    },
    StarterTask {
        project: "atlas-api",
        title: "Document pagination parameters",
        description: None,
        status: Status::Backlog,
        priority: Priority::Medium,
        days_out: None,
    },
    StarterTask {
        project: "atlas-api",
        title: "Retire the v1 endpoints",
        description: None,
        status: Status::Done,
        priority: Priority::Medium,
        days_out: Some(-7),
    },
    StarterTask {
        project: "atlas-web",
        title: "Fix mobile navigation overflow",
        description: Some("Menu items wrap off-screen below 360px width."),
        status: Status::Todo,
        priority: Priority::High,
        days_out: Some(3),
    },
    StarterTask {
        project: "atlas-web",
        title: "Dark mode palette pass",
        description: None,
        status: Status::Backlog,
        priority: Priority::Low,
        days_out: None,
    },
    StarterTask {
        project: "atlas-web",
        title: "Lazy-load the reports page",
        description: None,
        status: Status::InProgress,
        priority: Priority::Medium,
        days_out: Some(5),
    },
    StarterTask {
        project: "atlas-web",
        title: "Update onboarding screenshots",
        description: None,
        status: Status::Backlog,
        priority: Priority::Medium,
        days_out: None,
    },
    StarterTask {
        project: "atlas-web",
        title: "Accessibility audit of forms",
        description: None,
        status: Status::Todo,
        priority: Priority::High,
        days_out: Some(10),
    },
    StarterTask {
        project: "pet-care",
        title: "Order flea treatment refills",
        description: None,
        status: Status::Todo,
        priority: Priority::Medium,
        days_out: Some(1),
    },
    StarterTask {
        project: "pet-care",
        title: "Book the annual vet checkup",
        description: None,
        status: Status::Backlog,
        priority: Priority::High,
        days_out: Some(14),
    },
    StarterTask {
        project: "pet-care",
        title: "Replace the litter station",
        description: None,
        status: Status::Done,
        priority: Priority::Low,
        days_out: Some(-2),
    },
    StarterTask {
        project: "pet-care",
        title: "Research pet insurance plans",
        description: None,
        status: Status::Backlog,
        priority: Priority::Medium,
        days_out: None,
    },
    StarterTask {
        project: "facilities",
        title: "Schedule HVAC maintenance",
        description: None,
        status: Status::Todo,
        priority: Priority::Medium,
        days_out: Some(7),
    },
    StarterTask {
        project: "research-ai",
        title: "Summarize embedding model benchmarks",
        description: None,
        status: Status::InProgress,
        priority: Priority::High,
        days_out: Some(6),
    },
];

fn starter_projects(created_at: DateTime<Utc>) -> Vec<(String, Project)> {
    STARTER_PROJECTS
        .iter()
        .map(|spec| {
            (
                spec.id.to_string(),
                Project {
                    id: spec.id.to_string(),
                    name: spec.name.to_string(),
                    color: spec.color,
                    icon: spec.icon,
                    created_at: Some(created_at),
                },
            )
        })
        .collect()
}

fn starter_tasks(user: &AuthUser, today: NaiveDate, created_at: DateTime<Utc>) -> Vec<Task> {
    STARTER_TASKS
        .iter()
        .map(|spec| {
            let draft = TaskDraft {
                title: spec.title.to_string(),
                description: spec.description.map(str::to_string),
                notes: None,
                status: spec.status,
                priority: spec.priority,
                project_id: spec.project.to_string(),
                date: spec.days_out.map(|days| today + Duration::days(days)),
            };
            Task::from_draft(draft, &user.id, Some(user.avatar_or_default()), created_at)
        })
        .collect()
}

/// Replace the whole board with the starter data set.
///
/// Admin only and confirmed. Each collection is replaced in a single
/// batch, so observers see the old board and then the seeded one with
/// nothing in between. Returns `None` when the user declines.
pub async fn seed_starter_data(ctx: &BoardContext) -> BoardErrorResult<Option<SeedReport>> {
    let user = ctx.require_admin().await?;
    if !ctx.dialogs.confirm(CONFIRM_PROMPT) {
        return Ok(None);
    }

    let created_at = Utc::now();
    let today = created_at.date_naive();

    // Projects first, under fixed ids the starter tasks reference
    let mut project_ops: Vec<BatchOp> = ctx
        .store
        .get_all(PROJECTS)
        .await?
        .into_iter()
        .map(|doc| BatchOp::Delete { id: doc.id })
        .collect();
    let projects = starter_projects(created_at);
    let seeded_projects = projects.len();
    for (id, project) in projects {
        project_ops.push(BatchOp::Set {
            id: Some(id),
            fields: project.to_fields()?,
        });
    }
    ctx.store.batch(PROJECTS, project_ops).await?;

    // Tasks second, ids assigned by the store
    let mut task_ops: Vec<BatchOp> = ctx
        .store
        .get_all(TASKS)
        .await?
        .into_iter()
        .map(|doc| BatchOp::Delete { id: doc.id })
        .collect();
    let tasks = starter_tasks(&user, today, created_at);
    let seeded_tasks = tasks.len();
    for task in tasks {
        task_ops.push(BatchOp::Set {
            id: None,
            fields: task.to_fields()?,
        });
    }
    ctx.store.batch(TASKS, task_ops).await?;

    info!("Seeded starter data: {seeded_projects} projects, {seeded_tasks} tasks");
    ctx.metrics.write_committed("seed");
    Ok(Some(SeedReport {
        projects: seeded_projects,
        tasks: seeded_tasks,
    }))
}
