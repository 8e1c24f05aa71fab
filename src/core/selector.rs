use crate::core::distance::{distance_with_radius, MEAN_EARTH_RADIUS_KM};
use crate::domain::model::{GeoPoint, Invitee, Located};

/// Entities strictly closer than `within` km to `origin`, ascending by id.
pub fn select<'a, T: Located>(entities: &'a [T], origin: &GeoPoint, within: f64) -> Vec<&'a T> {
    select_with_distance(entities, origin, within)
        .into_iter()
        .map(|invitee| invitee.entity)
        .collect()
}

pub fn select_with_distance<'a, T: Located>(
    entities: &'a [T],
    origin: &GeoPoint,
    within: f64,
) -> Vec<Invitee<'a, T>> {
    select_with_radius(entities, origin, within, MEAN_EARTH_RADIUS_KM)
}

/// Same as [`select_with_distance`] with `within` and the returned distances
/// expressed in the unit of `radius`.
pub fn select_with_radius<'a, T: Located>(
    entities: &'a [T],
    origin: &GeoPoint,
    within: f64,
    radius: f64,
) -> Vec<Invitee<'a, T>> {
    let mut nearby: Vec<Invitee<'a, T>> = entities
        .iter()
        .map(|entity| Invitee {
            entity,
            distance_km: distance_with_radius(origin, entity.location(), radius),
        })
        .filter(|invitee| invitee.distance_km < within)
        .collect();

    // stable: duplicate ids keep input order
    nearby.sort_by_key(|invitee| invitee.entity.id());

    tracing::debug!(
        "Selected {} of {} entities within {} of {}",
        nearby.len(),
        entities.len(),
        within,
        origin
    );

    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::distance;
    use crate::domain::model::Customer;

    fn customer(user_id: i64, name: &str, lat: f64, long: f64) -> Customer {
        Customer::new(
            user_id,
            Some(name.to_string()),
            GeoPoint::new(lat, long).unwrap(),
        )
    }

    fn santa_clara() -> GeoPoint {
        GeoPoint::new(37.354444, -121.969167).unwrap()
    }

    fn dublin() -> GeoPoint {
        GeoPoint::new(53.3381985, -6.2592576).unwrap()
    }

    fn sample_customers() -> Vec<Customer> {
        vec![
            customer(1, "Santa Clara", 37.354444, -121.969167),
            customer(2, "San Francisco", 37.783333, -122.416667),
            customer(3, "Los Angeles", 34.05, -118.25),
            customer(4, "Dublin", 53.3381985, -6.2592576),
        ]
    }

    fn ids(selected: &[&Customer]) -> Vec<i64> {
        selected.iter().map(|c| c.user_id).collect()
    }

    #[test]
    fn test_within_500_of_santa_clara() {
        let customers = sample_customers();
        let result = select(&customers, &santa_clara(), 500.0);
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_within_500_of_dublin() {
        let customers = sample_customers();
        let result = select(&customers, &dublin(), 500.0);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_within_zero_is_empty() {
        let customers = sample_customers();
        assert!(select(&customers, &santa_clara(), 0.0).is_empty());
        assert!(select(&customers, &santa_clara(), -10.0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let customers: Vec<Customer> = Vec::new();
        assert!(select(&customers, &dublin(), 1000.0).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let customers = sample_customers();
        let origin = santa_clara();
        let exact = distance(&origin, &customers[1].location);

        let result = select(&customers, &origin, exact);
        assert_eq!(ids(&result), vec![1]);

        let result = select(&customers, &origin, exact + 1e-9);
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_output_sorted_regardless_of_input_order() {
        let mut customers = sample_customers();
        customers.reverse();
        let before = customers.clone();

        let result = select(&customers, &santa_clara(), 20_000.0);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
        assert_eq!(customers, before);
    }

    #[test]
    fn test_duplicate_ids_keep_input_order() {
        let customers = vec![
            customer(7, "second", 37.783333, -122.416667),
            customer(3, "first", 34.05, -118.25),
            customer(7, "third", 37.354444, -121.969167),
        ];
        let result = select(&customers, &santa_clara(), 1000.0);
        let names: Vec<&str> = result.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_select_with_distance_reports_distance() {
        let customers = sample_customers();
        let result = select_with_distance(&customers, &santa_clara(), 100.0);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].distance_km, 0.0);
        assert!((result[1].distance_km - 61.89).abs() < 0.01);
    }

    #[test]
    fn test_select_with_radius_in_miles() {
        let customers = sample_customers();
        let result = select_with_radius(&customers, &santa_clara(), 50.0, 3958.8);
        assert_eq!(result.len(), 2);
        assert!((result[1].distance_km - 38.45).abs() < 0.05);
    }
}
