use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::{Stream, StreamExt};
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::app::Result;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

/// Async terminal events, so page loads keep progressing on the same
/// thread while the UI waits for input.
pub struct EventHandler<S = EventStream> {
    events: S,
    ticker: Interval,
    closed: bool,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_stream(EventStream::new(), tick_rate)
    }
}

impl<S> EventHandler<S>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    pub fn with_stream(events: S, tick_rate: Duration) -> Self {
        let mut ticker = interval(tick_rate);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            events,
            ticker,
            closed: false,
        }
    }

    pub async fn next(&mut self) -> Result<AppEvent> {
        loop {
            // Once input is gone only the ticker drives redraws.
            if self.closed {
                self.ticker.tick().await;
                return Ok(AppEvent::Tick);
            }

            tokio::select! {
                _ = self.ticker.tick() => return Ok(AppEvent::Tick),
                event = self.events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        return Ok(AppEvent::Key(key));
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::debug!("Terminal event stream closed");
                        self.closed = true;
                    }
                },
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    NextFeed,
    PrevFeed,
    OpenInBrowser,
    Reload,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use futures::stream;
    use tokio::time::Instant;

    #[tokio::test]
    async fn test_key_press_is_delivered() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let input: Vec<io::Result<Event>> = vec![Ok(Event::Key(key))];
        let events = stream::iter(input).chain(stream::pending());
        let mut handler = EventHandler::with_stream(events, Duration::from_secs(3600));

        // The interval's first tick is immediate and may win the race.
        let mut delivered = None;
        for _ in 0..2 {
            if let AppEvent::Key(k) = handler.next().await.unwrap() {
                delivered = Some(k.code);
                break;
            }
        }
        assert_eq!(delivered, Some(KeyCode::Char('j')));
    }

    #[tokio::test]
    async fn test_closed_stream_waits_for_ticker() {
        let tick = Duration::from_millis(40);
        let mut handler = EventHandler::with_stream(stream::empty::<io::Result<Event>>(), tick);

        let started = Instant::now();
        for _ in 0..4 {
            assert!(matches!(handler.next().await.unwrap(), AppEvent::Tick));
        }
        assert!(started.elapsed() >= tick * 2);
    }
}
