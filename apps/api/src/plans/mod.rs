// Saved career plans: roadmap documents plus milestone progress.

pub mod handlers;
