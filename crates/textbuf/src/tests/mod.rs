mod classify;
mod transform;
