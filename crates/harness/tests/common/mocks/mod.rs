//! Stub devices and mock collaborators.
