use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::task::upcoming;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    let document = app.document();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let next = upcoming(&document.tasks, &today);
    if next.is_empty() {
        msg_info!(Message::NoUpcomingTasks);
        return Ok(());
    }
    msg_print!(Message::UpcomingHeader, true);
    View::upcoming(&next);
    Ok(())
}
