//! Display implementations for domain models.
//!
//! Every model formats as markdown: a header line, a metadata list, then any
//! free-form text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Goal, Plan, Planner, Status, Task, Version};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// Icon and label summarising the two progress flags.
    pub fn progress_label(&self) -> &'static str {
        match (self.started, self.completed) {
            (_, true) => "✓ Completed",
            (true, false) => "➤ Started",
            (false, false) => "○ Open",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.progress_label())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        if !self.owner.is_empty() {
            writeln!(f, "- Owner: {}", self.owner)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(
            f,
            "- Scheduled: {} {}",
            self.date,
            self.time.strftime("%H:%M")
        )?;
        writeln!(f, "- Goal: {}", self.goal_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            for task in &self.tasks {
                writeln!(f)?;
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.objective)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Deadline: {}", self.deadline)?;
        writeln!(f, "- Planner: {}", self.planner_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Owner: {}", self.owner)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Version {}", self.version)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Goal: {}", self.goal_id)?;
        if let Some(plan_id) = &self.plan_id {
            writeln!(f, "- Plan: {plan_id}")?;
        }
        if let Some(task_id) = &self.task_id {
            writeln!(f, "- Task: {task_id}")?;
        }
        if let Some(previous) = &self.previous_version {
            writeln!(f, "- Previous: {previous}")?;
        }
        writeln!(f, "- Created by: {}", self.created_by)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        writeln!(f, "\n## Snapshot")?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} ({})",
            self.snapshot.goal.objective,
            self.snapshot.goal.status.with_icon()
        )?;
        for plan in &self.snapshot.plans {
            writeln!(
                f,
                "  - {} ({}, {} tasks)",
                plan.name,
                plan.status.with_icon(),
                plan.tasks.len()
            )?;
        }
        Ok(())
    }
}
