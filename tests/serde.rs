/* ************************************************************************ **
** This file is part of eucl, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Run with `cargo test --features serde-support`.
#![cfg(feature = "serde-support")]

use pretty_assertions::assert_eq;

use eucl::{V2, V3, M33, M44, Quat, Tolerances};

#[test]
fn values_serialize_as_bare_arrays() {
    assert_eq!(serde_json::to_string(&V2([1.0, -2.5])).unwrap(), "[1.0,-2.5]");
    assert_eq!(
        serde_json::to_string(&M33::<f64>::eye()).unwrap(),
        "[[1.0,0.0,0.0],[0.0,1.0,0.0],[0.0,0.0,1.0]]",
    );
    assert_eq!(serde_json::to_string(&Quat::new(1.0f32, 0.0, 0.0, 0.0)).unwrap(), "[1.0,0.0,0.0,0.0]");
}

#[test]
fn values_survive_json() {
    let v: V3 = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
    assert_eq!(v, V3([1.0, 2.0, 3.0]));

    let mut m = M44::<f64>::eye();
    m.translate(1.0, 2.0, 3.0).rotate_z(0.5);
    let back: M44 = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
    assert!(back.is_close(&m, Tolerances { abs: 1e-15, rel: 0.0 }));

    let q = Quat::new(0.5, -0.5, 0.5, -0.5);
    let back: Quat = serde_json::from_str(&serde_json::to_string(&q).unwrap()).unwrap();
    assert_eq!(back, q);
}

#[test]
fn wrong_length_is_rejected() {
    assert!(serde_json::from_str::<V2>("[1.0, 2.0, 3.0]").is_err());
    assert!(serde_json::from_str::<M33>("[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]").is_err());
}
