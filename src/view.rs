//! Filter and sort pipeline for the task list.

use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::task::{normalize_label, Status, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(Status::Pending),
        StatusFilter::Only(Status::InProgress),
        StatusFilter::Only(Status::Completed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Tasks",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == status,
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::OPTIONS, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::OPTIONS, self, -1)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "all" | "all tasks" => Ok(StatusFilter::All),
            _ => s
                .parse::<Status>()
                .map(StatusFilter::Only)
                .map_err(|_| DashboardError::UnknownFilter(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Earliest due date first.
    #[default]
    DueDate,
    /// High, then Medium, then Low.
    Priority,
    /// Most points first.
    Points,
    /// Alphabetical by status label.
    Status,
}

impl SortKey {
    pub const OPTIONS: [SortKey; 4] = [
        SortKey::DueDate,
        SortKey::Priority,
        SortKey::Points,
        SortKey::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::DueDate => "Due Date",
            SortKey::Priority => "Priority",
            SortKey::Points => "Points",
            SortKey::Status => "Status",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::OPTIONS, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::OPTIONS, self, -1)
    }

    fn sort(self, tasks: &mut [&Task]) {
        // slice::sort_by is stable, so ties keep insertion order.
        match self {
            SortKey::DueDate => tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
            SortKey::Priority => tasks.sort_by_key(|t| t.priority.rank()),
            SortKey::Points => tasks.sort_by(|a, b| b.points.cmp(&a.points)),
            SortKey::Status => tasks.sort_by(|a, b| a.status.label().cmp(b.status.label())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "due date" | "due" | "date" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            "points" => Ok(SortKey::Points),
            "status" => Ok(SortKey::Status),
            _ => Err(DashboardError::UnknownSortKey(s.to_string())),
        }
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: isize) -> T {
    let len = options.len() as isize;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(index + step).rem_euclid(len) as usize]
}

/// The tasks to display, or an explicit marker that nothing matched.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskListing<'a> {
    Tasks(Vec<&'a Task>),
    NoMatches,
}

impl<'a> TaskListing<'a> {
    pub fn tasks(&self) -> &[&'a Task] {
        match self {
            TaskListing::Tasks(tasks) => tasks.as_slice(),
            TaskListing::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TaskListing::NoMatches)
    }
}

pub fn filter_and_sort(tasks: &[Task], filter: StatusFilter, sort: SortKey) -> TaskListing<'_> {
    let mut selected: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    if selected.is_empty() {
        return TaskListing::NoMatches;
    }
    sort.sort(&mut selected);
    TaskListing::Tasks(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use crate::task_store::TaskStore;

    fn ids<'a>(listing: &TaskListing<'a>) -> Vec<&'a str> {
        listing.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn completed_filter_returns_single_task() {
        let store = TaskStore::sample().unwrap();
        let listing = filter_and_sort(
            store.tasks(),
            StatusFilter::Only(Status::Completed),
            SortKey::DueDate,
        );
        assert_eq!(ids(&listing), ["DC-004"]);
    }

    #[test]
    fn filter_and_complement_cover_store() {
        let store = TaskStore::sample().unwrap();
        for status in Status::ALL {
            let matching =
                filter_and_sort(store.tasks(), StatusFilter::Only(status), SortKey::DueDate);
            assert!(matching.tasks().iter().all(|t| t.status == status));
            let others = store.tasks().iter().filter(|t| t.status != status).count();
            assert_eq!(matching.len() + others, store.len());
        }
    }

    #[test]
    fn points_sort_is_descending() {
        let store = TaskStore::sample().unwrap();
        let listing = filter_and_sort(store.tasks(), StatusFilter::All, SortKey::Points);
        let points: Vec<u32> = listing.tasks().iter().map(|t| t.points).collect();
        assert_eq!(points, [20, 15, 12, 10, 8, 6]);
    }

    #[test]
    fn due_date_sort_is_ascending() {
        let store = TaskStore::sample().unwrap();
        let listing = filter_and_sort(store.tasks(), StatusFilter::All, SortKey::DueDate);
        assert!(listing
            .tasks()
            .windows(2)
            .all(|w| w[0].due_date <= w[1].due_date));
        assert_eq!(
            ids(&listing),
            ["DC-004", "DC-001", "DC-003", "DC-002", "DC-005", "DC-006"]
        );
    }

    #[test]
    fn priority_sort_is_stable_high_first() {
        let store = TaskStore::sample().unwrap();
        let listing = filter_and_sort(store.tasks(), StatusFilter::All, SortKey::Priority);
        assert_eq!(
            ids(&listing),
            ["DC-001", "DC-003", "DC-002", "DC-005", "DC-004", "DC-006"]
        );
    }

    #[test]
    fn unknown_priority_sorts_last() {
        let store = TaskStore::sample().unwrap();
        let mut tasks = store.tasks().to_vec();
        tasks[0].priority = Priority::Other("Someday".into());
        let listing = filter_and_sort(&tasks, StatusFilter::All, SortKey::Priority);
        assert_eq!(listing.tasks().last().unwrap().id, "DC-001");
    }

    #[test]
    fn status_sort_is_alphabetical_and_stable() {
        let store = TaskStore::sample().unwrap();
        let listing = filter_and_sort(store.tasks(), StatusFilter::All, SortKey::Status);
        assert_eq!(
            ids(&listing),
            ["DC-004", "DC-002", "DC-005", "DC-001", "DC-003", "DC-006"]
        );
    }

    #[test]
    fn empty_result_is_explicit() {
        let store = TaskStore::sample().unwrap();
        let pending: Vec<Task> = store
            .get_tasks_by_status(Status::Pending)
            .into_iter()
            .cloned()
            .collect();
        let listing = filter_and_sort(&pending, StatusFilter::Only(Status::Completed), SortKey::Points);
        assert_eq!(listing, TaskListing::NoMatches);
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn controls_cycle_both_ways() {
        assert_eq!(StatusFilter::All.next(), StatusFilter::Only(Status::Pending));
        assert_eq!(StatusFilter::All.prev(), StatusFilter::Only(Status::Completed));
        assert_eq!(SortKey::Status.next(), SortKey::DueDate);
        assert_eq!(SortKey::DueDate.prev(), SortKey::Status);
    }

    #[test]
    fn labels_parse_back() {
        for filter in StatusFilter::OPTIONS {
            assert_eq!(filter.label().parse::<StatusFilter>().unwrap(), filter);
        }
        for key in SortKey::OPTIONS {
            assert_eq!(key.label().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("in-progress".parse::<StatusFilter>().unwrap(), StatusFilter::Only(Status::InProgress));
        assert_eq!("due-date".parse::<SortKey>().unwrap(), SortKey::DueDate);
        assert!(matches!(
            "Blocked".parse::<StatusFilter>(),
            Err(DashboardError::UnknownFilter(_))
        ));
        assert!(matches!(
            "Size".parse::<SortKey>(),
            Err(DashboardError::UnknownSortKey(_))
        ));
    }
}
