//! This crate is my attempt at writing a proper singly linked list, grown out of the classic
//! linked-list exercise family.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. A singly linked list is usually the first structure people
//! hand-wave, so I wanted to write one to the standard I'd expect from a real library: a public
//! [`Node`](collections::linked::Node) chain primitive, a
//! [`LinkedList`](collections::linked::LinkedList) that owns its nodes head-to-tail, a full
//! iterator suite and the usual std trait impls.
//!
//! # Method
//! Each node exclusively owns its successor through an owned box, and the construction API never
//! hands out successor mutation, so a chain can't be bent into a cycle in safe code. Traversal and
//! rendering therefore always terminate. Everything that walks the chain (drop, clone, rendering,
//! comparison, hashing) does so iteratively rather than recursively, so list length is bounded by
//! memory rather than stack depth.
//!
//! # Error Handling
//! For a collection, it is more ergonomic for functions to panic in some cases, because users
//! don't want to be forced to handle an error every time they index into a list. Fallible
//! operations therefore come in pairs: a panicking method (`get`, `insert`, `remove`, ...) and a
//! `try_` variant returning a strongly typed error. Errors are plain structs implementing
//! [`Error`](std::error::Error), composed into enums for static dispatch rather than dynamic.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or [`std::collections::LinkedList`] anywhere; the point is to own
//! the representation. It does depend on some derive macros because they're helpful and remove the
//! need for some very repetitive programming.
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
