use async_channel_io::async_channel::{Receiver, Sender};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Waits on a browser timer. Only usable inside a wasm event loop.
pub struct Sleepr {
    channel: (Sender<()>, Receiver<()>),
    millis: u32,
}

impl Sleepr {
    pub fn new(duration_ms: u32) -> Self {
        let (tx, rx) = async_channel_io::async_channel::bounded::<()>(1);

        Self {
            channel: (tx, rx),
            millis: duration_ms,
        }
    }

    pub async fn sleep(self) {
        let (tx, rx) = self.channel;
        let millis = self.millis;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;

            // The receiver only goes away if the waiting future was dropped
            let _ = tx.send(()).await;
        });

        if rx.recv().await.is_err() {
            log::warn!("Sleeper woke up without a signal after {millis} ms");
        }
    }
}
