//! Independent population across threads.

use crate::common::requests::{CustomerRequest, SignupRequest};
use api_fixtures::{FillOptions, Fixture, prepare_default};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_fixtures_do_not_interfere() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                (0..25)
                    .map(|_| {
                        Fixture::<SignupRequest>::new()
                            .seed(move |req| req.status_id = worker)
                            .build()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut emails = HashSet::new();
    for (worker, handle) in handles.into_iter().enumerate() {
        for signup in handle.join().unwrap() {
            assert_eq!(signup.status_id, worker as i64);
            assert!(signup.first_name.starts_with("Auto_"));
            emails.insert(signup.email);
        }
    }
    // 26^5 local parts
    assert!(emails.len() >= 195);
}

#[test]
fn test_shared_options_across_threads() {
    let options = Arc::new(FillOptions::new().with_email_domain("example.org").exclude("tags"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let options = Arc::clone(&options);
            thread::spawn(move || {
                Fixture::<CustomerRequest>::new()
                    .options((*options).clone())
                    .seed(|req| req.tags = vec![String::new()])
                    .build()
            })
        })
        .collect();

    for handle in handles {
        let customer = handle.join().unwrap();
        assert_eq!(customer.tags, vec![""]);
        assert!(customer.billing.is_some());
    }
}

#[test]
fn test_prepare_default_in_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(prepare_default::<SignupRequest>))
        .collect();
    for handle in handles {
        assert!(!handle.join().unwrap().phone_number.is_empty());
    }
}
