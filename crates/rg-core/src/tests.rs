//! Unit tests for rg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, NodeId, WayId};

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(CellId(100) > CellId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, i64::MAX);
        assert_eq!(WayId::INVALID.0, i64::MAX);
        assert_eq!(CellId::INVALID.0, u32::MAX);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(CellId(3).to_string(), "CellId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BoundingBox, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(13.0604, 80.2496);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude on a 6 378 100 m sphere:
        // 6_378_100 * PI / 180 ≈ 111 319 m.
        let a = GeoPoint::new(13.0, 80.0);
        let b = GeoPoint::new(14.0, 80.0);
        let d = a.distance_m(b);
        assert!((d - 111_319.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(13.0604, 80.2496);
        let b = GeoPoint::new(13.0711, 80.2417);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }

    #[test]
    fn bbox_membership_is_inclusive() {
        let bbox = BoundingBox::new(13.0, 13.5, 80.0, 80.5);
        assert!(bbox.contains(GeoPoint::new(13.25, 80.25)));
        assert!(bbox.contains(GeoPoint::new(13.0, 80.0)));
        assert!(bbox.contains(GeoPoint::new(13.5, 80.5)));
        assert!(!bbox.contains(GeoPoint::new(12.999, 80.25)));
        assert!(!bbox.contains(GeoPoint::new(13.25, 80.501)));
    }

    #[test]
    fn snap_to_grid_widens_the_box() {
        let raw = BoundingBox::new(12.8342, 13.2614, 80.1239, 80.3461);
        let snapped = raw.snap_to_grid(0.01);
        assert_eq!(snapped.min_lat, 12.83);
        assert_eq!(snapped.max_lat, 13.27);
        assert_eq!(snapped.min_lon, 80.12);
        assert_eq!(snapped.max_lon, 80.35);
    }

    #[test]
    fn snap_to_grid_keeps_aligned_edges() {
        let raw = BoundingBox::new(13.00, 13.05, 80.00, 80.05);
        let snapped = raw.snap_to_grid(0.01);
        assert_eq!(snapped, raw);
    }
}

#[cfg(test)]
mod rng {
    use crate::{CellId, CellRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = CellRng::new(42, CellId(7));
        let mut b = CellRng::new(42, CellId(7));
        for _ in 0..100 {
            let x: f64 = a.gen_range(0.0..1.0);
            let y: f64 = b.gen_range(0.0..1.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_cells_diverge() {
        let mut a = CellRng::new(42, CellId(0));
        let mut b = CellRng::new(42, CellId(1));
        let xs: Vec<f64> = (0..8).map(|_| a.gen_range(0.0..1.0)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.gen_range(0.0..1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = CellRng::new(1, CellId(0));
        let mut b = CellRng::new(2, CellId(0));
        let xs: Vec<f64> = (0..8).map(|_| a.gen_range(0.0..1.0)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.gen_range(0.0..1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_range_respects_bounds() {
        let mut rng = CellRng::new(0, CellId(0));
        for _ in 0..1000 {
            let v: f64 = rng.gen_range(13.00..13.01);
            assert!((13.00..13.01).contains(&v));
        }
    }
}
