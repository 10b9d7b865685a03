//! Wire types shared between the condominium backend and the browser frontend.

pub mod domain;
