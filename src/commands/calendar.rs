use crate::libs::app::App;
use crate::libs::calendar::MonthGrid;
use crate::libs::messages::Message;
use crate::libs::task::display_order;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    /// Select a day of the current month and list its tasks
    #[arg(short, long)]
    day: Option<u32>,
}

pub fn cmd(args: CalendarArgs) -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    let today = Local::now().date_naive();
    let grid = MonthGrid::new(today, args.day);
    if let Some(day) = args.day {
        if !grid.contains(day) {
            msg_error!(Message::InvalidCalendarDay(day, grid.days));
            return Ok(());
        }
    }

    msg_print!(Message::CalendarHeader(grid.title()), true);
    View::calendar(&grid);

    // Selecting a day re-renders the task list filtered to that exact date
    if let Some(day) = args.day {
        let date = grid.date_for(day);
        let document = app.document();
        let due = display_order(
            document.tasks.iter().filter(|task| task.date.as_deref() == Some(date.as_str())),
        );
        if due.is_empty() {
            msg_info!(Message::NoTasksForDate(date));
        } else {
            msg_print!(Message::SelectedDayHeader(date), true);
            View::tasks(&due);
        }
    }
    Ok(())
}
