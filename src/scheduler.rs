// scheduler.rs — per-frame animation callbacks with cooperative cancellation

type Callback<T> = Box<dyn FnMut(&mut T, &mut Animation)>;

/// Handle returned by [`Scheduler::animate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// Passed to a running callback so it can cancel itself.
#[derive(Debug)]
pub struct Animation {
    handle: AnimationHandle,
    cancelled: bool,
}

impl Animation {
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn handle(&self) -> AnimationHandle {
        self.handle
    }
}

/// Runs registered callbacks once per tick, in registration order, until
/// each one is cancelled.
pub struct Scheduler<T> {
    callbacks: Vec<(AnimationHandle, Callback<T>)>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animate<F>(&mut self, callback: F) -> AnimationHandle
    where
        F: FnMut(&mut T, &mut Animation) + 'static,
    {
        self.next_id += 1;
        let handle = AnimationHandle(self.next_id);
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    /// Stop a callback from being invoked again. Unknown handles are ignored.
    pub fn cancel(&mut self, handle: AnimationHandle) {
        self.callbacks.retain(|(h, _)| *h != handle);
    }

    pub fn is_active(&self, handle: AnimationHandle) -> bool {
        self.callbacks.iter().any(|(h, _)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run every live callback once. Callbacks that cancel themselves are
    /// dropped before the next tick.
    pub fn tick(&mut self, target: &mut T) {
        self.callbacks.retain_mut(|(handle, callback)| {
            let mut animation = Animation {
                handle: *handle,
                cancelled: false,
            };
            callback(target, &mut animation);
            !animation.cancelled
        });
    }
}
