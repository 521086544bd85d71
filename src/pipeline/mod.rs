mod dedupe;
mod sort;
mod status;

pub use dedupe::dedupe;
pub use sort::{SortStrategy, sort_tasks};
pub use status::{DueStatus, PriorityBand, due_status, parse_due_date};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use chrono::NaiveDate;

    fn task(title: &str, due: &str, importance: i64, hours: f64, deps: Vec<i64>) -> Task {
        Task::new(title)
            .with_due_date(due)
            .with_importance(importance)
            .with_estimated_hours(hours)
            .with_dependencies(deps)
    }

    fn day(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    // ---------- 去重 ----------

    #[test]
    fn dedupe_prefers_first_occurrence() {
        // 标题大小写 / 首尾空白不同仍算同一任务
        let tasks = vec![
            task("A", "2024-01-01", 5, 1.0, vec![]),
            task("  a ", "2024-01-01", 5, 1.0, vec![]),
        ];

        let result = dedupe(&tasks);
        assert_eq!(result.len(), 1, "应该只保留一个任务");
        assert_eq!(result[0].title.as_deref(), Some("A"), "保留首次出现的那条");
    }

    #[test]
    fn dedupe_is_idempotent() {
        let tasks = vec![
            task("a", "2024-01-01", 5, 1.0, vec![]),
            task("a", "2024-01-01", 5, 1.0, vec![]),
            task("b", "2024-02-01", 3, 2.0, vec![1]),
            task("a", "2024-01-01", 5, 1.0, vec![]),
        ];

        let once = dedupe(&tasks);
        let twice = dedupe(&once);
        assert_eq!(once, twice, "dedupe(dedupe(T)) 必须等于 dedupe(T)");
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn dedupe_distinguishes_on_every_key_field() {
        let base = task("a", "2024-01-01", 5, 1.0, vec![]);
        let tasks = vec![
            base.clone(),
            task("a", "2024-01-02", 5, 1.0, vec![]),
            task("a", "2024-01-01", 6, 1.0, vec![]),
            task("a", "2024-01-01", 5, 1.5, vec![]),
            task("a", "2024-01-01", 5, 1.0, vec![7]),
        ];
        assert_eq!(dedupe(&tasks).len(), 5, "任一键字段不同都不算重复");
    }

    #[test]
    fn dedupe_ignores_id_and_score() {
        let mut persisted = task("a", "2024-01-01", 5, 1.0, vec![]);
        persisted.id = Some(42);
        persisted.score = Some(120.0);
        let fresh = task("a", "2024-01-01", 5, 1.0, vec![]);

        let result = dedupe(&[persisted, fresh]);
        assert_eq!(result.len(), 1, "id 和 score 不参与去重键");
        assert_eq!(result[0].id, Some(42));
    }

    #[test]
    fn dedupe_collides_on_identically_missing_fields() {
        // 两个都缺失 due_date / importance / estimated_hours 的任务视为重复
        let tasks = vec![Task::new("a"), Task::new("A")];
        assert_eq!(dedupe(&tasks).len(), 1);
    }

    #[test]
    fn dedupe_keeps_reordered_dependencies() {
        // 当前键方案对依赖顺序敏感：同一集合的不同排列不算重复。
        // 行为是有意保留的，这里显式固定下来。
        let tasks = vec![
            task("a", "2024-01-01", 5, 1.0, vec![1, 2]),
            task("a", "2024-01-01", 5, 1.0, vec![2, 1]),
        ];
        assert_eq!(dedupe(&tasks).len(), 2, "依赖顺序不同视为不同任务");
    }

    #[test]
    fn dedupe_does_not_mutate_input() {
        let tasks = vec![
            task("a", "2024-01-01", 5, 1.0, vec![]),
            task("a", "2024-01-01", 5, 1.0, vec![]),
        ];
        let snapshot = tasks.clone();
        let _ = dedupe(&tasks);
        assert_eq!(tasks, snapshot, "输入序列必须保持原样");
    }

    // ---------- 排序 ----------

    #[test]
    fn sort_deadline_earliest_first_invalid_last() {
        let tasks = vec![
            task("late", "2024-03-01", 5, 1.0, vec![]),
            task("broken", "whenever", 5, 1.0, vec![]),
            task("early", "2024-01-15", 5, 1.0, vec![]),
        ];

        let sorted = sort_tasks(&tasks, SortStrategy::Deadline);
        assert_eq!(sorted[0].title.as_deref(), Some("early"));
        assert_eq!(sorted[1].title.as_deref(), Some("late"));
        assert_eq!(
            sorted[2].title.as_deref(),
            Some("broken"),
            "无法解析的日期排在最后"
        );
    }

    #[test]
    fn sort_quick_wins_shortest_first() {
        let tasks = vec![
            task("slow", "2024-01-01", 5, 8.0, vec![]),
            task("fast", "2024-01-01", 5, 0.5, vec![]),
            task("mid", "2024-01-01", 5, 2.0, vec![]),
        ];

        let sorted = sort_tasks(&tasks, SortStrategy::QuickWins);
        let hours: Vec<f64> = sorted.iter().filter_map(|t| t.estimated_hours).collect();
        assert_eq!(hours, vec![0.5, 2.0, 8.0]);
    }

    #[test]
    fn sort_importance_is_stable() {
        let tasks = vec![
            task("c3", "2024-01-01", 3, 1.0, vec![]),
            task("first9", "2024-01-01", 9, 1.0, vec![]),
            task("second9", "2024-01-01", 9, 1.0, vec![]),
        ];

        let sorted = sort_tasks(&tasks, SortStrategy::Importance);
        let titles: Vec<&str> = sorted.iter().filter_map(|t| t.title.as_deref()).collect();
        assert_eq!(
            titles,
            vec!["first9", "second9", "c3"],
            "同重要度的任务必须保持输入相对顺序"
        );
    }

    #[test]
    fn sort_priority_lowest_number_first() {
        let mut a = task("urgent", "2024-01-01", 5, 1.0, vec![]);
        a.priority = Some(1.0);
        let mut b = task("relaxed", "2024-01-01", 5, 1.0, vec![]);
        b.priority = Some(3.0);
        let c = task("unranked", "2024-01-01", 5, 1.0, vec![]);

        let sorted = sort_tasks(&[b, c, a], SortStrategy::Priority);
        let titles: Vec<&str> = sorted.iter().filter_map(|t| t.title.as_deref()).collect();
        assert_eq!(titles, vec!["urgent", "relaxed", "unranked"]);
    }

    #[test]
    fn sort_score_descending_missing_as_zero() {
        let low = task("low", "2024-01-01", 5, 1.0, vec![]).with_score(10.0);
        let high = task("high", "2024-01-01", 5, 1.0, vec![]).with_score(50.0);
        let unscored = task("unscored", "2024-01-01", 5, 1.0, vec![]);

        let sorted = sort_tasks(&[low, unscored, high], SortStrategy::Score);
        let titles: Vec<&str> = sorted.iter().filter_map(|t| t.title.as_deref()).collect();
        assert_eq!(titles, vec!["high", "low", "unscored"]);
    }

    #[test]
    fn unknown_strategy_falls_back_to_score() {
        assert_eq!(SortStrategy::parse("bogus"), SortStrategy::Score);

        let tasks = vec![
            task("a", "2024-01-01", 5, 1.0, vec![]).with_score(10.0),
            task("b", "2024-01-01", 5, 1.0, vec![]).with_score(50.0),
        ];
        let sorted = sort_tasks(&tasks, SortStrategy::parse("bogus"));
        let scores: Vec<f64> = sorted.iter().filter_map(|t| t.score).collect();
        assert_eq!(scores, vec![50.0, 10.0], "未知策略回退为按得分降序");
    }

    #[test]
    fn known_strategy_ids_round_trip() {
        for id in ["deadline", "quickWins", "importance", "priority", "score"] {
            assert_eq!(SortStrategy::parse(id).id(), id);
        }
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let tasks = vec![
            task("b", "2024-02-01", 2, 1.0, vec![]),
            task("a", "2024-01-01", 9, 1.0, vec![]),
        ];
        let snapshot = tasks.clone();
        let _ = sort_tasks(&tasks, SortStrategy::Importance);
        assert_eq!(tasks, snapshot);
    }

    // ---------- 优先级分档 ----------

    #[test]
    fn band_boundaries_belong_to_higher_band() {
        assert_eq!(PriorityBand::from_score(150.0), PriorityBand::Critical);
        assert_eq!(PriorityBand::from_score(149.999), PriorityBand::High);
        assert_eq!(PriorityBand::from_score(100.0), PriorityBand::High);
        assert_eq!(PriorityBand::from_score(99.999), PriorityBand::Medium);
        assert_eq!(PriorityBand::from_score(50.0), PriorityBand::Medium);
        assert_eq!(PriorityBand::from_score(0.0), PriorityBand::Low);
        assert_eq!(PriorityBand::from_score(-10.0), PriorityBand::Low);
    }

    // ---------- 到期状态 ----------

    #[test]
    fn due_status_boundaries() {
        let today = day("2024-06-10");

        assert_eq!(due_status(Some("2024-06-10"), today), DueStatus::DueToday);
        assert_eq!(
            due_status(Some("2024-06-07"), today),
            DueStatus::Overdue { days: 3 },
            "逾期 3 天，报告其绝对值"
        );
        assert_eq!(
            due_status(Some("2024-06-13"), today),
            DueStatus::DueSoon { days: 3 }
        );
        assert_eq!(
            due_status(Some("2024-06-14"), today),
            DueStatus::DueLater { days: 4 }
        );
    }

    #[test]
    fn due_status_invalid_date_is_never_due_later() {
        let today = day("2024-06-10");

        assert_eq!(due_status(Some(""), today), DueStatus::InvalidDate);
        assert_eq!(due_status(Some("06/10/2024"), today), DueStatus::InvalidDate);
        assert_eq!(due_status(None, today), DueStatus::InvalidDate);
    }

    #[test]
    fn due_status_labels() {
        assert_eq!(DueStatus::Overdue { days: 2 }.to_string(), "OVERDUE (2 days)");
        assert_eq!(DueStatus::DueToday.to_string(), "Due TODAY");
        assert_eq!(DueStatus::DueSoon { days: 1 }.to_string(), "Due in 1 day(s)");
        assert_eq!(DueStatus::DueLater { days: 9 }.to_string(), "Due in 9 days");
        assert_eq!(DueStatus::InvalidDate.to_string(), "Invalid due date");
    }
}
