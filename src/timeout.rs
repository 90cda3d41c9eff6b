use core::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};

/// Returned by a solver that was stopped before it could prove optimality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interrupted;

/// Cooperative interruption token. The solver polls `interrupted` once per
/// recursive call and unwinds as soon as it reports true.
#[derive(Clone, Debug, Default)]
pub struct Interrupter {
    flag: Option<Arc<AtomicBool>>,
}

impl Interrupter {
    pub fn none() -> Self {
        Self { flag: None }
    }

    pub fn flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag: Some(flag) }
    }

    /// Raises the token once `max_duration` has elapsed, watched from a
    /// separate thread polling every 10ms.
    pub fn deadline(max_duration: Duration) -> Self {
        let flag = Arc::new(AtomicBool::new(false));
        let watched = Arc::clone(&flag);
        let start_time = SystemTime::now();
        thread::Builder::new()
            .name("deadline".into())
            .spawn(move || loop {
                thread::sleep(Duration::from_millis(10));
                if start_time
                    .elapsed()
                    .expect("failed to obtain elapsed time")
                    > max_duration
                {
                    watched.store(true, Ordering::SeqCst);
                    break;
                }
            })
            .expect("failed to spawn thread");
        Self { flag: Some(flag) }
    }

    pub fn interrupted(&self) -> bool {
        #[cfg(feature = "handle-ctrlc")]
        {
            if crate::signals::received_ctrl_c() {
                return true;
            }
        }
        match &self.flag {
            Some(flag) => flag.load(Ordering::SeqCst),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::timeout::Interrupter;
    use core::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[test]
    fn test_none_never_fires() {
        assert!(!Interrupter::none().interrupted());
    }

    #[test]
    fn test_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let interrupter = Interrupter::flag(Arc::clone(&flag));
        assert!(!interrupter.interrupted());
        flag.store(true, Ordering::SeqCst);
        assert!(interrupter.interrupted());
    }
}
