use gpui::prelude::*;
use gpui::*;
use pulse_trends::{
    HealthRecord, HistoryView, RecordType, TrendBoard, TrendChartConfig, TrendPanel,
};
use rand::Rng;
use tracing_subscriber::EnvFilter;

struct DemoApp {
    board: Entity<TrendBoard>,
}

impl DemoApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let board = cx.new(|cx| {
            let mut board =
                TrendBoard::new(TrendPanel::defaults(), TrendChartConfig::default(), cx);

            let now = chrono::Utc::now().timestamp_millis();
            let hour_ms = 3_600_000;
            let mut rng = rand::rng();
            let mut records = Vec::new();

            for i in 0..24 {
                let ts = now - (24 - i) * 6 * hour_ms;
                let sys = 115 + rng.random_range(0..25);
                let dia = 70 + rng.random_range(0..15);
                records.push(HealthRecord::blood_pressure(
                    format!("bp-{i}"),
                    ts,
                    &sys.to_string(),
                    &dia.to_string(),
                ));
                if i % 2 == 0 {
                    let level = 90 + rng.random_range(0..60);
                    records.push(HealthRecord::sugar(
                        format!("sugar-{i}"),
                        ts,
                        &level.to_string(),
                        "Random",
                    ));
                }
                let kind = if i % 3 == 0 { RecordType::Pulse } else { RecordType::Heartrate };
                let bpm = 60 + rng.random_range(0..30);
                records.push(HealthRecord::heart(format!("hr-{i}"), kind, ts, &bpm.to_string()));
            }

            board.set_records(records, cx);
            board.set_mode(HistoryView::Chart, cx);
            board
        });

        Self { board }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::white())
            .child(self.board.clone())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
