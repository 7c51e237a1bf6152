//! # Taskboard
//!
//! A command-line client for a task-management REST service.
//!
//! ## Features
//!
//! - **Accounts**: register, log in, restore the session from a stored token, log out
//! - **Task Management**: create, edit and delete tasks; every change is followed by a full refresh
//! - **Filtering**: by owner (own tasks, or everyone's for admins) and by completion state
//! - **Confirmation**: destructive actions go through an explicit confirm step
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
