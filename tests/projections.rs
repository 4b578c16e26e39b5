#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use planpro::libs::calendar::MonthGrid;
    use planpro::libs::progress::ProgressChart;
    use planpro::libs::quote;
    use planpro::libs::task::{upcoming, Category, Priority, Task};

    fn task(id: u64, date: Option<&str>, done: bool) -> Task {
        let mut task = Task::new(id, "task", Category::Other, "", date.map(str::to_string), Priority::Medium);
        task.done = done;
        task
    }

    #[test]
    fn test_upcoming_filters_and_sorts() {
        let tasks = vec![
            task(1, Some("2024-05-30"), false), // past
            task(2, Some("2024-06-01"), false), // due today
            task(3, Some("2024-06-05"), false), // future
            task(4, Some("2024-06-02"), true),  // done, excluded despite future date
            task(5, None, false),               // undated, excluded
        ];

        let dates: Vec<&str> = upcoming(&tasks, "2024-06-01")
            .into_iter()
            .filter_map(|task| task.date.as_deref())
            .collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-05"]);
    }

    #[test]
    fn test_upcoming_truncates_to_ten() {
        let tasks: Vec<Task> = (1..=15)
            .map(|day| task(day, Some(&format!("2024-06-{:02}", day)), false))
            .collect();

        let next = upcoming(&tasks, "2024-06-01");
        assert_eq!(next.len(), 10);
        assert_eq!(next[0].date.as_deref(), Some("2024-06-01"));
        assert_eq!(next[9].date.as_deref(), Some("2024-06-10"));
    }

    #[test]
    fn test_month_grid_june_2024() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let grid = MonthGrid::new(today, Some(3));

        // June 1st 2024 was a Saturday
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days, 30);
        assert_eq!(grid.today, 15);
        assert_eq!(grid.selected, Some(3));
        assert_eq!(grid.title(), "June 2024");
        assert_eq!(grid.date_for(5), "2024-06-05");
    }

    #[test]
    fn test_month_grid_leap_february() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let grid = MonthGrid::new(today, None);

        // February 1st 2024 was a Thursday
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days, 29);
        assert!(grid.contains(29));
        assert!(!grid.contains(30));
        assert!(!grid.contains(0));
    }

    #[test]
    fn test_month_grid_december_rollover() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let grid = MonthGrid::new(today, None);
        assert_eq!(grid.days, 31);
        assert_eq!(grid.title(), "December 2024");
    }

    #[test]
    fn test_progress_chart_counts() {
        let chart = ProgressChart::new(3, 1);
        assert_eq!(chart.total(), 4);
        assert!(chart.render().contains("done 3 / pending 1"));
    }

    #[test]
    fn test_progress_chart_empty() {
        let chart = ProgressChart::new(0, 0);
        assert_eq!(chart.total(), 0);
        assert!(chart.render().contains("nothing tracked yet"));
    }

    #[test]
    fn test_quote_pick_comes_from_fixed_set() {
        let picked = quote::pick();
        assert!(quote::QUOTES.contains(&picked));
    }
}
