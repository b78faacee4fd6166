//! Runs a toy task scheduler on top of the priority queue.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example task_scheduler
//! ```

use colored::*;
use heap_queue::{Error, HeapKind, PriorityQueue};

#[derive(Debug)]
struct Task {
    name: &'static str,
    cost_ms: u32,
}

fn main() {
    env_logger::init();

    // Urgent work first: larger priority wins
    let mut scheduler = PriorityQueue::new(HeapKind::Max);
    scheduler.put(
        Task {
            name: "flush write-ahead log",
            cost_ms: 12,
        },
        90,
    );
    scheduler.put(
        Task {
            name: "rebuild search index",
            cost_ms: 800,
        },
        10,
    );
    scheduler.put(
        Task {
            name: "answer health check",
            cost_ms: 1,
        },
        100,
    );
    scheduler.put(
        Task {
            name: "compact old segments",
            cost_ms: 350,
        },
        25,
    );
    scheduler.put(
        Task {
            name: "rotate log files",
            cost_ms: 40,
        },
        25,
    );

    println!("{}", "--- Running tasks by priority ---".bright_cyan().bold());

    let mut clock_ms = 0u32;
    while !scheduler.is_empty() {
        let (task, priority) = match scheduler.get() {
            Ok(item) => item.into_inner(),
            Err(err) => {
                eprintln!("{}", err.to_string().bright_red());
                break;
            }
        };
        clock_ms += task.cost_ms;

        let label = if priority >= 90 {
            format!("[{:>3}]", priority).bright_red().bold()
        } else {
            format!("[{:>3}]", priority).bright_green()
        };
        println!("{} {:<24} done at {:>5} ms", label, task.name, clock_ms);
    }

    // The queue is drained; asking again is an error, not a panic
    if let Err(Error::EmptyQueue) = scheduler.get() {
        println!("{}", "Scheduler idle.".bright_yellow());
    }
}
