//! Read-only views: the dashboard and the report.

use super::Rendered;
use crate::render;
use crate::screens::{DashboardScreen, ReportingScreen};
use crate::session::Session;

pub async fn dashboard(session: &Session) -> Rendered {
    let mut screen = DashboardScreen::new(session.api.clone());
    screen.load().await;
    Rendered::new(
        render::dashboard(&screen, session.render_options()),
        screen.error(),
    )
}

pub async fn report(session: &Session) -> Rendered {
    let mut screen = ReportingScreen::new(session.api.clone());
    screen.load().await;
    Rendered::new(
        render::report(&screen, session.render_options()),
        screen.error(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use crate::error::CONNECTION_FAILED;
    use wings_client::{Fault, Operation};

    #[tokio::test]
    async fn test_dashboard() {
        let (session, _) = session();
        let rendered = dashboard(&session).await;
        assert_eq!(rendered.error, None);
        assert!(rendered.output.contains("Low Stock Alerts"));
        assert!(rendered.output.contains("Tea"));
    }

    #[tokio::test]
    async fn test_dashboard_offline() {
        let (session, fake) = session();
        fake.fail(Operation::ListProducts, Fault::Unreachable).await;
        let rendered = dashboard(&session).await;
        assert_eq!(rendered.error.as_deref(), Some(CONNECTION_FAILED));
        assert!(rendered.output.contains("Total Products:   0"));
    }

    #[tokio::test]
    async fn test_report() {
        let (session, _) = session();
        let rendered = report(&session).await;
        assert!(rendered.output.contains("Sales Summary"));
        assert!(rendered.output.contains("Tea      3"));
    }
}
