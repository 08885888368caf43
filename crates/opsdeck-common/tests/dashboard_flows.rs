//! End-to-end tests for the OpsDeck view model
//!
//! Exercises the flows a user walks through in the dashboard: searching the
//! project list, switching resource tabs, editing a project team, loading
//! telemetry and signing in and out.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use opsdeck_common::config::SessionConfig;
use opsdeck_common::edit::EditBuffer;
use opsdeck_common::filter::{filter_by_type, ProjectFilter};
use opsdeck_common::routes::Route;
use opsdeck_common::session::{MemoryStorage, RouteDecision, Session};
use opsdeck_common::store::SampleStore;
use opsdeck_common::telemetry::generate_middleware_stats;
use opsdeck_common::{ResourceStatus, ResourceType, TeamRole, UserRole};

/// Fixed clock shared by all tests.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 5, 14, 0, 0).unwrap()
}

fn store() -> SampleStore {
    SampleStore::new(now())
}

#[test]
fn test_filtered_projects_are_matching_subset() {
    let store = store();
    let terms = ["", "pay", "SHOP", "example", "track", "zzz", "e"];
    let owners = ["", "alice", "Charlie", "bob", "ops"];

    for search in terms {
        for owner in owners {
            let filter = ProjectFilter::new(search, owner);
            let result = filter.apply(store.projects());

            assert!(result.len() <= store.projects().len());
            for project in &result {
                assert!(store.projects().iter().any(|p| p.id == project.id));
                assert!(filter.matches(project));
            }

            // Order follows the store.
            let positions: Vec<_> = result
                .iter()
                .map(|p| store.projects().iter().position(|q| q.id == p.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_search_pay_finds_payment_gateway() {
    let store = store();
    let result = ProjectFilter::new("pay", "").apply(store.projects());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Payment Gateway Service");
}

#[test]
fn test_resource_tabs_partition_inventory() {
    let store = store();
    let mut seen = HashSet::new();
    let mut total = 0;

    for ty in ResourceType::ALL {
        let tab = filter_by_type(store.resources(), ty);
        assert!(tab.iter().all(|r| r.resource_type == ty));
        total += tab.len();
        for r in tab {
            assert!(seen.insert(r.id.clone()), "{} listed twice", r.id);
        }
    }

    assert_eq!(total, store.resources().len());
    assert_eq!(seen.len(), store.resources().len());
}

#[test]
fn test_ec2_tab_lists_two_instances() {
    let store = store();
    let ec2: Vec<_> = filter_by_type(store.resources(), ResourceType::Ec2)
        .into_iter()
        .map(|r| (r.name.as_str(), r.status))
        .collect();

    assert_eq!(
        ec2,
        vec![
            ("web-server-01", ResourceStatus::Running),
            ("worker-node-01", ResourceStatus::Stopped),
        ]
    );
}

#[test]
fn test_double_toggle_restores_membership() {
    let store = store();

    for project in store.projects() {
        for role in [TeamRole::Developer, TeamRole::Admin] {
            for user in store.users() {
                let mut buffer = EditBuffer::edit(&store, &project.id).unwrap();
                let before: HashSet<_> = buffer.draft().team(role).iter().map(|u| u.id.clone()).collect();

                buffer.toggle_member(&store, &user.id, role);
                buffer.toggle_member(&store, &user.id, role);

                let after: HashSet<_> = buffer.draft().team(role).iter().map(|u| u.id.clone()).collect();
                assert_eq!(before, after, "{} / {:?} / {}", project.id, role, user.id);
            }
        }
    }
}

#[test]
fn test_create_buffer_is_blank() {
    let store = store();

    for seed in 0..16 {
        let buffer = EditBuffer::create(&store, &mut StdRng::seed_from_u64(seed), now());
        let draft = buffer.draft();

        assert!(draft.developers.is_empty());
        assert!(draft.admins.is_empty());

        let suffix = draft.id.strip_prefix("P-").expect("generated id has P- prefix");
        let n: u32 = suffix.parse().unwrap();
        assert!(n < 10_000);
        assert!(!suffix.is_empty());
    }
}

#[test]
fn test_create_buffer_id_is_fresh() {
    let store = store();

    // Covers seed 3187, whose first draw is P-1003
    for seed in 0..4_000 {
        let buffer = EditBuffer::create(&store, &mut StdRng::seed_from_u64(seed), now());
        let id = &buffer.draft().id;
        assert!(store.project(id).is_none(), "seed {} opened existing project {}", seed, id);
    }
}

#[test]
fn test_stats_series_invariants() {
    for seed in [0, 1, 42, 1337] {
        let stats = generate_middleware_stats(&mut StdRng::seed_from_u64(seed), now());
        assert_eq!(stats.len(), 24);
        assert!(stats.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert!(stats.iter().all(|s| (10..70).contains(&s.cpu)));
        assert!(stats.iter().all(|s| (20..60).contains(&s.memory)));
        assert!(stats.iter().all(|s| (100..1100).contains(&s.requests)));
        assert!(stats.iter().all(|s| s.errors < 10));
    }
}

#[test]
fn test_sign_out_redirects_protected_views() {
    let session = Session::new(MemoryStorage::new(), SessionConfig::default());
    session.login(UserRole::Admin).unwrap();
    assert_eq!(session.guard(&Route::Projects), RouteDecision::Allow);

    session.logout().unwrap();

    for path in ["/", "/projects", "/projects/new", "/projects/P-1001", "/projects/P-1001/edit", "/resources"] {
        let route = Route::parse(path).unwrap();
        assert_eq!(session.guard(&route), RouteDecision::Redirect(Route::Login), "{}", path);
    }
    assert_eq!(session.guard(&Route::Login), RouteDecision::Allow);
}
