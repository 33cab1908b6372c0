//! End-to-end composition tests.
