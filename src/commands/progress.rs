use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::progress::ProgressChart;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let app = match App::current() {
        Ok(app) => app,
        Err(err) => {
            super::report(&err);
            return Ok(());
        }
    };
    let document = app.document();
    let done = document.done_count();
    let chart = ProgressChart::new(done, document.tasks.len() - done);
    msg_print!(Message::ProgressLabel(done, document.tasks.len()));
    View::progress(&chart);
    Ok(())
}
