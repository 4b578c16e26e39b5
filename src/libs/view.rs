use crate::libs::calendar::MonthGrid;
use crate::libs::document::UserDocument;
use crate::libs::messages::Message;
use crate::libs::progress::ProgressChart;
use crate::libs::quote;
use crate::libs::task::{display_order, upcoming, Task};
use crate::{msg_info, msg_print};
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "CATEGORY", "DUE", "PRIORITY", "NOTE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.done { "✔" } else { "" },
                task.title,
                format!("{} {}", task.cat.emoji(), task.cat.label()),
                task.date.as_deref().unwrap_or("-"),
                task.priority.label(),
                task.note
            ]);
        }
        table.printstd();
    }

    pub fn upcoming(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["DUE", "TITLE", "CATEGORY"]);
        for task in tasks {
            table.add_row(row![
                task.date.as_deref().unwrap_or("-"),
                task.title,
                format!("{} {}", task.cat.emoji(), task.cat.label())
            ]);
        }
        table.printstd();
    }

    pub fn calendar(grid: &MonthGrid) {
        let mut table = Table::new();

        table.add_row(row!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        let mut cells: Vec<String> = vec![String::new(); grid.leading_blanks as usize];
        for day in 1..=grid.days {
            let mut cell = day.to_string();
            if day == grid.today {
                cell = format!("[{}]", cell);
            }
            if grid.selected == Some(day) {
                cell = format!("*{}*", cell);
            }
            cells.push(cell);
        }
        while cells.len() % 7 != 0 {
            cells.push(String::new());
        }
        for week in cells.chunks(7) {
            table.add_row(Row::new(week.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();
    }

    pub fn journal(text: &str) {
        println!("{}", text);
    }

    pub fn progress(chart: &ProgressChart) {
        println!("{}", chart.render());
    }
}

/// Renders every view from one freshly loaded document, in the same order as
/// the original page: journal, tasks, calendar, upcoming, progress, quote.
///
/// Holds at most one live chart; the previous instance is dropped before the
/// replacement is built.
pub struct Dashboard {
    chart: Option<ProgressChart>,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard { chart: None }
    }

    /// The chart from the latest render pass, if one has happened.
    pub fn chart(&self) -> Option<&ProgressChart> {
        self.chart.as_ref()
    }

    pub fn render(&mut self, document: &UserDocument, today: NaiveDate) {
        if document.journal.is_empty() {
            msg_info!(Message::JournalEmpty);
        } else {
            msg_print!(Message::JournalHeader, true);
            View::journal(&document.journal);
        }

        let ordered = display_order(document.tasks.iter());
        if ordered.is_empty() {
            msg_info!(Message::NoTasksYet);
        } else {
            msg_print!(Message::TasksHeader, true);
            View::tasks(&ordered);
        }

        let grid = MonthGrid::new(today, None);
        msg_print!(Message::CalendarHeader(grid.title()), true);
        View::calendar(&grid);

        let today_key = today.format("%Y-%m-%d").to_string();
        let next = upcoming(&document.tasks, &today_key);
        if next.is_empty() {
            msg_info!(Message::NoUpcomingTasks);
        } else {
            msg_print!(Message::UpcomingHeader, true);
            View::upcoming(&next);
        }

        let done = document.done_count();
        self.chart = None;
        let chart = ProgressChart::new(done, document.tasks.len() - done);
        msg_print!(Message::ProgressLabel(done, document.tasks.len()));
        View::progress(&chart);
        self.chart = Some(chart);

        msg_print!(quote::pick(), true);
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
