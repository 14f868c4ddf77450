use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::errors::DetectiveError;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// stderr progress line for one `analyze` run: spinner plus elapsed time
/// while the model call is in flight, then a one-line outcome.
pub struct AnimatedLogger {
    filename: String,
    started_at: Option<Instant>,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn analyzing(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            started_at: None,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let filename = self.filename.clone();
        let started_at = Instant::now();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(FRAME_INTERVAL);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{}", progress_line(&filename, frame, started_at.elapsed()));
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.started_at = Some(started_at);
        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    /// Returns how long the analysis ran.
    pub async fn succeed(&mut self, total_defects: u32) -> Duration {
        let elapsed = self.halt().await;
        eprintln!("\r\x1b[K✅ {}: {} defect(s) in {:.1}s", self.filename, total_defects, elapsed.as_secs_f64());
        elapsed
    }

    pub async fn fail(&mut self, error: &DetectiveError) -> Duration {
        let elapsed = self.halt().await;
        eprintln!("\r\x1b[K❌ {}: {} ({:.1}s)", self.filename, error, elapsed.as_secs_f64());
        elapsed
    }

    async fn halt(&mut self) -> Duration {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        self.started_at
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default()
    }
}

fn progress_line(filename: &str, frame: usize, elapsed: Duration) -> String {
    format!("🔍 Analyzing {} {} {:.1}s ", filename, FRAMES[frame % FRAMES.len()], elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_shows_file_frame_and_elapsed() {
        let line = progress_line("weld.jpg", 11, Duration::from_millis(2_340));
        assert_eq!(line, "🔍 Analyzing weld.jpg ⠙ 2.3s ");
    }

    #[tokio::test]
    async fn succeed_stops_the_spinner_and_reports_elapsed() {
        let mut logger = AnimatedLogger::analyzing("weld.jpg");
        logger.start();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let elapsed = logger.succeed(2).await;
        assert!(elapsed >= Duration::from_millis(20));
        assert!(logger.task_handle.is_none());
        assert!(logger.stop_sender.is_none());
    }

    #[tokio::test]
    async fn fail_without_start_reports_zero() {
        let mut logger = AnimatedLogger::analyzing("notes.txt");
        let error = DetectiveError::invalid_input("Only image files are supported");
        assert_eq!(logger.fail(&error).await, Duration::ZERO);
    }
}
