//! Checkpoint and Resume
//!
//! This example snapshots an in-flight machine to JSON, rebuilds the
//! machine from code (as a restarted process would), and resumes from the
//! snapshot.
//!
//! Key concepts:
//! - `key_enum!` for one-liner state and input declarations
//! - Snapshotting only the cursor, never the transition graph
//! - Restoring into a freshly built machine
//!
//! Run with: cargo run --example checkpoint_resume

use trellis::{key_enum, Checkpoint, Machine, MachineBuilder};

key_enum! {
    pub enum Document {
        Draft,
        Review,
        Published,
        Archived,
    }
}

key_enum! {
    pub enum Action {
        Submit,
        Approve,
        Archive,
    }
}

fn document_machine() -> Result<Machine<Document, Action>, trellis::BuildError> {
    MachineBuilder::new()
        .transition(Document::Draft, Action::Submit, Document::Review)?
        .transition(Document::Review, Action::Approve, Document::Published)?
        .transition(Document::Published, Action::Archive, Document::Archived)?
        .terminal(Document::Archived)?
        .build(Document::Draft)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut machine = document_machine()?;
    machine.process([Action::Submit])?;

    let json = machine.checkpoint().to_json()?;
    println!("checkpoint: {json}");

    // A restarted process rebuilds the machine from code and resumes.
    let mut resumed = document_machine()?;
    let snapshot: Checkpoint<Document> = Checkpoint::from_json(&json)?;
    resumed.restore(&snapshot)?;
    println!("resumed at {:?}", resumed.peek());

    resumed.process([Action::Approve, Action::Archive])?;
    println!("terminated: {}", resumed.is_terminated());

    Ok(())
}
