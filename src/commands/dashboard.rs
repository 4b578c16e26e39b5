use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::view::Dashboard;
use crate::{msg_debug, msg_info};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    match App::current() {
        Ok(app) => render(&app),
        Err(err) => {
            // Silent-resume failure: hint instead of an error
            msg_debug!(format!("dashboard without session: {}", err));
            msg_info!(Message::NotSignedInHint);
            Ok(())
        }
    }
}

pub fn render(app: &App) -> Result<()> {
    let document = app.document();
    let mut dashboard = Dashboard::new();
    dashboard.render(&document, Local::now().date_naive());
    Ok(())
}
