use std::rc::Rc;

pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

pub trait Observer<S, E> {
    fn update(&self, source: &S, event: E);
}

/// Anything that keeps a list of observers and pushes events to them.
///
/// Implementors only expose their observer storage; registration and
/// notification come for free.
pub trait Subject<E: Clone>: Sized {
    fn observers(&self) -> &SharedObservers<Self, E>;

    fn observers_mut(&mut self) -> &mut SharedObservers<Self, E>;

    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>) {
        self.observers_mut().push(observer);
    }

    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>) {
        self.observers_mut()
            .retain(|registered| !Rc::ptr_eq(registered, &observer));
    }

    fn notify_observers(&self, event: E) {
        for observer in self.observers() {
            observer.update(self, event.clone());
        }
    }
}
