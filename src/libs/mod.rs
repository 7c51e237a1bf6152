//! Core library modules for taskboard.
//!
//! ## Layout
//!
//! - **Core state**: [`store`], [`filter`], [`modal`], [`editor`], composed by [`dashboard`]
//! - **Authentication**: [`session`] lifecycle and the persisted [`token`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//! - **Presentation**: [`view`] tables
//!
//! ## Usage
//!
//! ```rust
//! use taskboard::libs::filter::{visible_tasks, CompletionFilter, OwnershipFilter};
//! use taskboard::libs::task::{Id, Task};
//!
//! let tasks: Vec<Task> = serde_json::from_str(
//!     r#"[{"id":1,"userId":7,"title":"a","completed":true},
//!         {"id":2,"userId":9,"title":"b","completed":false}]"#,
//! ).unwrap();
//! let visible = visible_tasks(&tasks, OwnershipFilter::Mine, CompletionFilter::All, &Id::from(7));
//! assert_eq!(visible.len(), 1);
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod editor;
pub mod filter;
pub mod messages;
pub mod modal;
pub mod session;
pub mod store;
pub mod task;
pub mod token;
pub mod view;
