//! Regularisation of the vector norm.
//!
//! [`norm`](crate::norm) computes `sqrt(dot(v, v) + eps²)` rather than the
//! plain euclidean length, so that it is smooth and strictly positive even
//! for a zero length vector and anything divided by it stays finite.
//!
//! `eps` is configuration.  It can be passed around explicitly as a
//! [`Regularisation`] value (the `*_with` functions), or left to the
//! process-wide value kept for each scalar type, which is what the plain
//! functions read.  The process-wide value starts out at
//! [`Real::default_eps`] the first time a scalar type is used and only
//! changes through [`set_global`] / [`set_global_eps`].
//!
//! Changing the process-wide value is not ordered against other threads
//! that are computing with the same scalar type.  Set it before starting
//! concurrent work, or use explicit `Regularisation` values.

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::Real;

/// A regularisation epsilon together with its square.
#[derive(Debug, Clone, PartialEq)]
pub struct Regularisation<T> {
    eps: T,
    eps_squared: T,
}

impl<T: Real> Regularisation<T> {
    pub fn new(eps: T) -> Regularisation<T> {
        let eps_squared = eps.clone() * eps.clone();
        Regularisation { eps, eps_squared }
    }

    /// Replaces `eps`, recomputing `eps_squared` from it.
    pub fn set_eps(&mut self, eps: T) {
        self.eps_squared = eps.clone() * eps.clone();
        self.eps = eps;
    }

    #[inline]
    pub fn eps(&self) -> &T {
        &self.eps
    }

    #[inline]
    pub fn eps_squared(&self) -> &T {
        &self.eps_squared
    }
}

impl<T: Real> Default for Regularisation<T> {
    fn default() -> Regularisation<T> {
        Regularisation::new(T::default_eps())
    }
}

lazy_static! {
    // Keyed by the scalar type; the value is always a `Regularisation` of
    // that same type.
    static ref GLOBAL: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>> =
        RwLock::new(HashMap::new());
}

/// The current process-wide regularisation for `T`.
pub fn global<T: Real>() -> Regularisation<T> {
    with_global(|reg: &Regularisation<T>| reg.clone())
}

/// Just the process-wide `eps²` for `T`, which is all `norm` needs.
pub fn global_eps_squared<T: Real>() -> T {
    with_global(|reg: &Regularisation<T>| reg.eps_squared.clone())
}

/// Replaces the process-wide regularisation for `T`.
///
/// This affects every later `norm` of every `Vector3D<T>`, including
/// vectors that already exist.
pub fn set_global<T: Real>(reg: Regularisation<T>) {
    debug!(
        scalar = type_name::<T>(),
        eps = %reg.eps,
        "setting process-wide regularisation"
    );
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(TypeId::of::<T>(), Box::new(reg));
}

pub fn set_global_eps<T: Real>(eps: T) {
    set_global(Regularisation::new(eps));
}

fn with_global<T: Real, R>(f: impl FnOnce(&Regularisation<T>) -> R) -> R {
    let id = TypeId::of::<T>();

    {
        let map = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(reg) = map.get(&id).and_then(|r| r.downcast_ref::<Regularisation<T>>()) {
            return f(reg);
        }
    }

    // First use of this scalar type.  Someone else may have got here
    // between the two locks, so look again.
    let mut map = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(reg) = map.get(&id).and_then(|r| r.downcast_ref::<Regularisation<T>>()) {
        return f(reg);
    }
    trace!(scalar = type_name::<T>(), "initialising default regularisation");
    let reg = Regularisation::<T>::default();
    let result = f(&reg);
    map.insert(id, Box::new(reg));
    result
}
