use super::{EntityRef, EntityType};

const BATTERY_SUFFIX: &str = "battery";
const LAST_SEEN_SUFFIX: &str = "last_seen";

/// Siblings of `primary_entity_id` on the same device whose id ends with one of the
/// suffixes. Explicit suffixes replace the ones of `entity_type`. Entities without a
/// state are skipped and input order is kept.
pub fn related_entities<'a>(
    device_id: &str,
    entity_type: Option<EntityType>,
    primary_entity_id: &str,
    all_entities: impl IntoIterator<Item = &'a EntityRef>,
    explicit_suffixes: Option<&[String]>,
) -> Vec<&'a EntityRef> {
    let suffixes: Vec<&str> = match explicit_suffixes {
        Some(suffixes) => suffixes.iter().map(String::as_str).collect(),
        None => entity_type
            .map(EntityType::related_entity_suffixes)
            .unwrap_or_default()
            .to_vec(),
    };

    if suffixes.is_empty() {
        return vec![];
    }

    let related: Vec<&EntityRef> = all_entities
        .into_iter()
        .filter(|entity| {
            entity.belongs_to(device_id)
                && entity.entity_id != primary_entity_id
                && suffixes.iter().any(|suffix| entity.entity_id.ends_with(suffix))
                && entity.state.is_some()
        })
        .collect();

    tracing::trace!(
        device_id,
        primary_entity_id,
        count = related.len(),
        "Resolved related entities"
    );

    related
}

/// Related entities split the way device cards show them: battery and last-seen
/// get their own slot, everything else is listed in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceEntities<'a> {
    pub battery: Option<&'a EntityRef>,
    pub last_seen: Option<&'a EntityRef>,
    pub others: Vec<&'a EntityRef>,
}

impl<'a> DeviceEntities<'a> {
    pub fn partition(related: Vec<&'a EntityRef>) -> Self {
        let position = |suffix: &str| related.iter().position(|e| e.entity_id.ends_with(suffix));

        let battery_pos = position(BATTERY_SUFFIX);
        let last_seen_pos = position(LAST_SEEN_SUFFIX);

        let mut result = DeviceEntities::default();
        for (i, entity) in related.into_iter().enumerate() {
            if Some(i) == battery_pos {
                result.battery = Some(entity);
            } else if Some(i) == last_seen_pos {
                result.last_seen = Some(entity);
            } else {
                result.others.push(entity);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(entity_id: &str, device_id: &str) -> EntityRef {
        EntityRef::new(entity_id).with_device(device_id).with_state("1")
    }

    fn ids(entities: &[&EntityRef]) -> Vec<String> {
        entities.iter().map(|e| e.entity_id.clone()).collect()
    }

    #[test]
    fn selects_siblings_of_same_device() {
        let all = vec![
            entity("sensor.dev1_temp", "dev1"),
            entity("sensor.dev1_humidity", "dev1"),
            entity("sensor.dev1_battery", "dev1"),
            entity("sensor.dev2_temperature", "dev2"),
        ];

        let related = related_entities(
            "dev1",
            Some(EntityType::Climate),
            "sensor.dev1_temp",
            &all,
            None,
        );

        assert_eq!(ids(&related), vec!["sensor.dev1_humidity", "sensor.dev1_battery"]);
    }

    #[test]
    fn excludes_primary_even_when_suffix_matches() {
        let all = vec![
            entity("sensor.dev1_temperature", "dev1"),
            entity("sensor.dev1_last_seen", "dev1"),
        ];

        let related = related_entities(
            "dev1",
            Some(EntityType::Climate),
            "sensor.dev1_temperature",
            &all,
            None,
        );

        assert_eq!(ids(&related), vec!["sensor.dev1_last_seen"]);
    }

    #[test]
    fn skips_entities_without_state() {
        let all = vec![
            EntityRef::new("sensor.dev1_battery").with_device("dev1"),
            entity("sensor.dev1_last_seen", "dev1"),
        ];

        let related =
            related_entities("dev1", Some(EntityType::Contact), "binary_sensor.dev1", &all, None);

        assert_eq!(ids(&related), vec!["sensor.dev1_last_seen"]);
    }

    #[test]
    fn explicit_suffixes_replace_table() {
        let all = vec![
            entity("sensor.dev1_battery", "dev1"),
            entity("sensor.dev1_voltage", "dev1"),
        ];
        let suffixes = vec!["voltage".to_owned()];

        let related = related_entities(
            "dev1",
            Some(EntityType::Contact),
            "binary_sensor.dev1",
            &all,
            Some(suffixes.as_slice()),
        );

        assert_eq!(ids(&related), vec!["sensor.dev1_voltage"]);
    }

    #[test]
    fn unknown_type_without_suffixes_is_empty() {
        let all = vec![entity("sensor.dev1_battery", "dev1")];

        assert!(related_entities("dev1", None, "switch.dev1", &all, None).is_empty());
        assert!(related_entities("dev1", None, "switch.dev1", &all, Some(&[][..])).is_empty());
    }

    #[test]
    fn all_matching_suffixes_qualify() {
        let all = vec![
            entity("sensor.dev1_illuminance_lux", "dev1"),
            entity("sensor.dev1_illuminance", "dev1"),
            entity("sensor.dev1_battery", "dev1"),
        ];

        let related =
            related_entities("dev1", Some(EntityType::Motion), "binary_sensor.dev1", &all, None);

        assert_eq!(related.len(), 3);
    }

    #[test]
    fn same_input_same_output() {
        let all = vec![entity("sensor.dev1_battery", "dev1")];

        let first = related_entities("dev1", Some(EntityType::Contact), "x.dev1", &all, None);
        let second = related_entities("dev1", Some(EntityType::Contact), "x.dev1", &all, None);
        assert_eq!(first, second);
    }

    #[test]
    fn partitions_battery_and_last_seen() {
        let all = vec![
            entity("sensor.dev1_humidity", "dev1"),
            entity("sensor.dev1_last_seen", "dev1"),
            entity("sensor.dev1_battery", "dev1"),
            entity("sensor.dev1_temperature", "dev1"),
        ];

        let partition = DeviceEntities::partition(all.iter().collect());

        assert_eq!(partition.battery.map(|e| e.entity_id.as_str()), Some("sensor.dev1_battery"));
        assert_eq!(
            partition.last_seen.map(|e| e.entity_id.as_str()),
            Some("sensor.dev1_last_seen")
        );
        assert_eq!(
            ids(&partition.others),
            vec!["sensor.dev1_humidity", "sensor.dev1_temperature"]
        );
    }

    #[test]
    fn partition_keeps_only_first_battery() {
        let all = vec![
            entity("sensor.dev1_battery", "dev1"),
            entity("sensor.dev1_backup_battery", "dev1"),
        ];

        let partition = DeviceEntities::partition(all.iter().collect());

        assert_eq!(partition.battery.map(|e| e.entity_id.as_str()), Some("sensor.dev1_battery"));
        assert_eq!(ids(&partition.others), vec!["sensor.dev1_backup_battery"]);
        assert!(partition.last_seen.is_none());
    }
}
