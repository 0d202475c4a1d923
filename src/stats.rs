use crate::task::{Status, Task};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub percentage: f64,
}

/// Aggregate figures shown in the progress overview.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub total_points: u64,
}

impl TaskStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            pending: 0,
            in_progress: 0,
            completed: 0,
            total_points: 0,
        };
        for task in tasks {
            match task.status {
                Status::Pending => stats.pending += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Completed => stats.completed += 1,
            }
            stats.total_points += u64::from(task.points);
        }
        stats
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Completed => self.completed,
        }
    }

    /// Percentage of all tasks with `status`; 0 for an empty store.
    pub fn percentage(&self, status: Status) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(status) as f64 / self.total as f64 * 100.0
        }
    }

    pub fn completion_percentage(&self) -> f64 {
        self.percentage(Status::Completed)
    }

    /// Statuses that occur at least once, most frequent first. Ties keep
    /// the order of [`Status::ALL`].
    pub fn breakdown(&self) -> Vec<StatusShare> {
        let mut shares: Vec<StatusShare> = Status::ALL
            .iter()
            .map(|&status| StatusShare {
                status,
                count: self.count(status),
                percentage: self.percentage(status),
            })
            .filter(|share| share.count > 0)
            .collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count));
        shares
    }
}
