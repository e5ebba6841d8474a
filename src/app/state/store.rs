//! Generischer Store: pure Reducer, Snapshots und Observer.
//!
//! Jeder Concern (Highlighted, Hidden, Basket, ...) ist ein eigener Store.
//! Ein Dispatch erzeugt über den puren Reducer einen neuen Snapshot; einmal
//! herausgegebene Snapshots werden nie in-place verändert, damit Konsumenten
//! Änderungen über Referenz-Gleichheit (`Arc::ptr_eq`) erkennen können.
//!
//! Neben dem Snapshot-Zugriff (`get`) gibt es den `StoreReader`: einen
//! Always-fresh-Accessor für langlebige Closures, die zum Aufrufzeitpunkt
//! garantiert den zuletzt committeten Zustand sehen wollen, ohne ihn beim
//! Erstellen der Closure einzufangen.

use std::sync::{Arc, PoisonError, RwLock};

/// Purer Zustands-Reducer: alter Snapshot + Action → neuer Snapshot.
/// Reducer sind total und schlagen für wohlgeformte Payloads nie fehl.
pub trait Reducer: Sized {
    type Action;

    fn reduce(&self, action: Self::Action) -> Self;
}

/// Observer, der nach jedem Commit mit dem neuen Snapshot gerufen wird.
pub type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Zustands-Container mit Dispatch, Snapshot-Zugriff und Observer-Liste.
pub struct Store<S> {
    /// Geteilte Zelle; `StoreReader` hält denselben Arc und sieht dadurch
    /// jeden Commit ohne Re-Subscribe.
    cell: Arc<RwLock<Arc<S>>>,
    subscribers: Vec<Subscriber<S>>,
}

impl<S> Store<S> {
    /// Erstellt einen Store mit Initial-Zustand.
    pub fn new(initial: S) -> Self {
        Self {
            cell: Arc::new(RwLock::new(Arc::new(initial))),
            subscribers: Vec::new(),
        }
    }

    /// Aktueller Snapshot. Der zurückgegebene Arc bleibt nach weiteren
    /// Dispatches unverändert gültig.
    pub fn get(&self) -> Arc<S> {
        self.cell
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Always-fresh-Accessor (siehe Modul-Doku).
    pub fn reader(&self) -> StoreReader<S> {
        StoreReader {
            cell: self.cell.clone(),
        }
    }

    /// Registriert einen Observer; wird nach jedem Commit benachrichtigt.
    pub fn subscribe(&mut self, subscriber: Subscriber<S>) {
        self.subscribers.push(subscriber);
    }

    /// Ersetzt den Zustand durch einen fertigen Snapshot und benachrichtigt
    /// alle Observer.
    pub fn commit(&mut self, next: S) {
        let next = Arc::new(next);
        {
            let mut slot = self.cell.write().unwrap_or_else(PoisonError::into_inner);
            *slot = next.clone();
        }
        for subscriber in &mut self.subscribers {
            subscriber(&next);
        }
    }
}

impl<S: Reducer> Store<S> {
    /// Führt die Action über den puren Reducer aus und committet das Ergebnis.
    pub fn dispatch(&mut self, action: S::Action) {
        let next = self.get().reduce(action);
        self.commit(next);
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Always-fresh-Leser auf einen Store (geteilte Zelle statt Wert-Capture).
#[derive(Clone)]
pub struct StoreReader<S> {
    cell: Arc<RwLock<Arc<S>>>,
}

impl<S> StoreReader<S> {
    /// Zuletzt committeter Snapshot zum Aufrufzeitpunkt.
    pub fn latest(&self) -> Arc<S> {
        self.cell
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
