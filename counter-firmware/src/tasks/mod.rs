// Task-Modul: Enthält alle Embassy Tasks
//
// Der Poll-Task ist der einzige Kontrollfluss der Zähllogik.
// Der Status-Task loggt nur die Events (Poll → Status per PubSub).

pub mod poll;
pub mod status;

// Re-export Tasks für einfachen Import
pub use poll::poll_task;
pub use status::status_task;
