//! Integration tests driving the release-stamp binary

mod helpers;
