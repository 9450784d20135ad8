//! Tests for the service modules and the session controller
