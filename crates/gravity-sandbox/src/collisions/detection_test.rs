use nalgebra::{Point2, Vector2};

use crate::body::{Body, Color};
use crate::collisions::detection::*;

fn make_body(mass: f64, x: f64, y: f64) -> Body {
    Body::new(mass, Point2::new(x, y), Vector2::zeros(), Color::RED).unwrap()
}

#[test]
fn test_separated_pair_has_no_contact() {
    let a = make_body(1000.0, 0.0, 0.0);
    let b = make_body(1000.0, 6.0, 0.0);

    // Radii 3 + 3: touching exactly is not an overlap
    assert!(check_pair(0, &a, 1, &b).is_none());
}

#[test]
fn test_overlapping_pair() {
    let a = make_body(1000.0, 0.0, 0.0);
    let b = make_body(1000.0, 0.0, 4.0);

    let contact = check_pair(0, &a, 1, &b).unwrap();

    assert_eq!((contact.a, contact.b), (0, 1));
    assert_eq!(contact.separation, 4.0);
    assert_eq!(contact.min_distance, 6.0);
    assert_eq!(contact.penetration(), 2.0);
    assert_eq!(contact.normal, Vector2::new(0.0, 1.0));
}

#[test]
fn test_radius_grows_with_mass() {
    // 3e5^(1/3) * 0.2 is just under 13.4, so radius 13
    let heavy = make_body(3.0e5, 0.0, 0.0);
    let light = make_body(1000.0, 15.5, 0.0);

    let contact = check_pair(0, &heavy, 1, &light).unwrap();
    assert_eq!(contact.min_distance, 16.0);
}

#[test]
fn test_coincident_pair_has_zero_normal() {
    let a = make_body(1000.0, 7.0, 7.0);
    let b = make_body(1000.0, 7.0, 7.0);

    let contact = check_pair(0, &a, 1, &b).unwrap();

    assert_eq!(contact.separation, 0.0);
    assert_eq!(contact.normal, Vector2::zeros());
}

#[test]
fn test_find_contacts_lists_every_pair() {
    let bodies = vec![
        make_body(1000.0, 0.0, 0.0),
        make_body(1000.0, 2.0, 0.0),
        make_body(1000.0, 4.0, 0.0),
        make_body(1000.0, 100.0, 100.0),
    ];

    let contacts = find_contacts(&bodies);
    let pairs: Vec<_> = contacts.iter().map(|c| (c.a, c.b)).collect();

    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn test_find_contacts_empty_and_single() {
    assert!(find_contacts(&[]).is_empty());
    assert!(find_contacts(&[make_body(1000.0, 0.0, 0.0)]).is_empty());
}
