mod models;
mod patch;
