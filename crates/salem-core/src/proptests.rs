//! Property-based tests for the scaler and the router.
