//! Unpublished test-only member of the `fixdec` workspace. The property
//! fuzzing suites live under `tests/`.
