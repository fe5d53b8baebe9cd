// src/gui/load.rs
//
// Background loading for the viewer. Each dataset lives in a shared slot;
// a worker thread drives one Loader call on its own tokio runtime, writes
// the outcome into the slot and asks egui for a repaint. The UI thread
// only ever reads the slot.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use eframe::egui;
use log::{debug, error, info};

use crate::config::options::DataSource;
use crate::loader::{self, Loader, Source};
use crate::records::{JobRecord, JobSchema, SectorRecord, SkillCategoryRecord, TimelineEventRecord};

#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    /// Shared so a frame can hold the rows without copying them.
    Ready(Arc<[T]>),
    /// Load came back empty; the page offers a retry.
    Failed,
}

impl<T> LoadState<T> {
    pub fn from_result(v: Vec<T>) -> Self {
        if v.is_empty() { LoadState::Failed } else { LoadState::Ready(v.into()) }
    }
}

/// Shared load state plus a request counter. Only the newest request may
/// publish; a slower, older worker finds the counter moved on and drops
/// its result.
pub struct Slot<T> {
    state: Arc<Mutex<LoadState<T>>>,
    generation: Arc<AtomicU64>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Slot { state: self.state.clone(), generation: self.generation.clone() }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            state: Arc::new(Mutex::new(LoadState::Loading)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<T> Slot<T> {
    /// A worker that panicked mid-write leaves a usable value behind.
    pub fn lock(&self) -> MutexGuard<'_, LoadState<T>> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Replace the state outright; any load still in flight is orphaned.
    pub fn set(&self, state: LoadState<T>) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.lock() = state;
    }

    /// Start a new request: back to `Loading`, returns its ticket.
    pub fn begin(&self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock() = LoadState::Loading;
        ticket
    }

    /// Store `state` if `ticket` is still the newest request.
    pub fn publish(&self, ticket: u64, state: LoadState<T>) -> bool {
        let mut guard = self.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            return false;
        }
        *guard = state;
        true
    }
}

/// Run `load` on a worker thread and publish the result into `slot`,
/// unless a newer request for the same slot was made in the meantime.
pub fn spawn<T, F, Fut>(
    ctx: &egui::Context,
    slot: &Slot<T>,
    what: &'static str,
    source: &DataSource,
    load: F,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    F: FnOnce(Loader<Source>) -> Fut + Send + 'static,
    Fut: Future<Output = Vec<T>>,
{
    let ticket = slot.begin();
    let slot = slot.clone();
    let source = source.clone();
    let ctx = ctx.clone();

    info!("Load: {} from {} (request {})", what, source.describe(), ticket);
    thread::spawn(move || {
        let loader = Loader::from_source(&source);
        let next = match loader::block_on(load(loader)) {
            Ok(v) => {
                info!("Load: {} done ({} records)", what, v.len());
                LoadState::from_result(v)
            }
            Err(e) => {
                error!("Load: {} could not start runtime: {}", what, e);
                LoadState::Failed
            }
        };
        if slot.publish(ticket, next) {
            ctx.request_repaint();
        } else {
            debug!("Load: {} request {} superseded, result dropped", what, ticket);
        }
    })
}

/// Every dataset the viewer shows.
#[derive(Clone, Default)]
pub struct Datasets {
    pub jobs: Slot<JobRecord>,
    pub sectors: Slot<SectorRecord>,
    pub skills: Slot<SkillCategoryRecord>,
    pub timeline: Slot<TimelineEventRecord>,
}

impl Datasets {
    pub fn load_all(&self, ctx: &egui::Context, source: &DataSource, schema: JobSchema) {
        self.load_jobs(ctx, source, schema);
        self.load_sectors(ctx, source);
        self.load_skills(ctx, source);
        self.load_timeline(ctx, source);
    }

    pub fn load_jobs(&self, ctx: &egui::Context, source: &DataSource, schema: JobSchema) {
        spawn(ctx, &self.jobs, schema.name(), source, move |l| async move {
            match schema {
                JobSchema::JobData => l.load_jobs().await,
                JobSchema::Augmented => l.load_augmented_jobs().await,
            }
        });
    }

    pub fn load_sectors(&self, ctx: &egui::Context, source: &DataSource) {
        spawn(ctx, &self.sectors, "sectors", source, |l| async move { l.load_sectors().await });
    }

    pub fn load_skills(&self, ctx: &egui::Context, source: &DataSource) {
        spawn(ctx, &self.skills, "skills", source, |l| async move { l.load_skills().await });
    }

    pub fn load_timeline(&self, ctx: &egui::Context, source: &DataSource) {
        spawn(ctx, &self.timeline, "timeline", source, |l| async move { l.load_timeline().await });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn ready(slot: &Slot<u32>) -> Option<Vec<u32>> {
        match &*slot.lock() {
            LoadState::Ready(v) => Some(v.to_vec()),
            _ => None,
        }
    }

    #[test]
    fn older_ticket_cannot_publish() {
        let slot: Slot<u32> = Slot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.publish(second, LoadState::from_result(vec![2])));
        assert!(!slot.publish(first, LoadState::from_result(vec![1])));
        assert_eq!(ready(&slot), Some(vec![2]));
    }

    #[test]
    fn set_orphans_inflight_request() {
        let slot: Slot<u32> = Slot::default();
        let ticket = slot.begin();
        slot.set(LoadState::from_result(vec![7]));

        assert!(!slot.publish(ticket, LoadState::Failed));
        assert_eq!(ready(&slot), Some(vec![7]));
    }

    #[test]
    fn slow_earlier_load_does_not_overwrite_newer() {
        let ctx = egui::Context::default();
        let slot: Slot<u32> = Slot::default();
        let source = DataSource::default();
        let (release, wait) = mpsc::channel::<()>();

        let older = spawn(&ctx, &slot, "older", &source, move |_| async move {
            let _ = wait.recv();
            vec![1]
        });
        let newer = spawn(&ctx, &slot, "newer", &source, |_| async move { vec![2] });

        newer.join().unwrap();
        assert_eq!(ready(&slot), Some(vec![2]));

        release.send(()).unwrap();
        older.join().unwrap();
        assert_eq!(ready(&slot), Some(vec![2]));
    }

    #[test]
    fn empty_result_is_failed() {
        assert!(matches!(LoadState::<u32>::from_result(Vec::new()), LoadState::Failed));
    }
}
