use mongo_nested_path::{
    placeholder_name, update_document, CompiledUpdate, PathError, UpdateKind,
};
use serde_json::{json, Value};

const HEX: &str = "507f1f77bcf86cd799439011";

fn oid(hex: &str) -> Value {
    json!({ "$oid": hex })
}

#[test]
fn update_create_matrix() {
    let update =
        update_document(UpdateKind::Create, "items", Some(json!({"name": "test"}))).unwrap();
    assert_eq!(
        update.document,
        json!({ "$push": { "items": { "name": "test" } } })
    );
    assert_eq!(update.options(), json!({ "arrayFilters": [] }));

    // Appending under an identified parent uses a positional token.
    let update = update_document(
        UpdateKind::Create,
        &format!("orders.id:{HEX}.lines"),
        Some(json!({"sku": "abc"})),
    )
    .unwrap();
    assert_eq!(
        update.document,
        json!({ "$push": { "orders.$[a].lines": { "sku": "abc" } } })
    );
    assert_eq!(update.array_filters, vec![json!({ "a._id": oid(HEX) })]);
}

#[test]
fn update_set_matrix() {
    let update = update_document(
        UpdateKind::Update,
        &format!("items.id:{HEX}"),
        Some(json!({"name": "x"})),
    )
    .unwrap();
    assert_eq!(
        update.document,
        json!({ "$set": { "items.$[a]": { "name": "x" } } })
    );
    assert_eq!(update.array_filters, vec![json!({ "a._id": oid(HEX) })]);

    // One filter per identifier-bearing segment.
    let second = "507f1f77bcf86cd799439012";
    let update = update_document(
        UpdateKind::Update,
        &format!("level1.id:{HEX}.level2.id:{second}.field"),
        Some(json!({"value": "test"})),
    )
    .unwrap();
    assert_eq!(
        update.document,
        json!({ "$set": { "level1.$[a].level2.$[b].field": { "value": "test" } } })
    );
    assert_eq!(
        update.array_filters,
        vec![
            json!({ "a._id": oid(HEX) }),
            json!({ "b._id": oid(second) }),
        ]
    );
}

#[test]
fn update_remove_matrix() {
    // Final identifier becomes the pull payload, not a filter.
    let update = update_document(UpdateKind::Remove, &format!("items.id:{HEX}"), None).unwrap();
    assert_eq!(
        update.document,
        json!({ "$pull": { "items": { "_id": oid(HEX) } } })
    );
    assert_eq!(update.array_filters, Vec::<Value>::new());

    // Deeper removal: every identifier but the last contributes a filter.
    let target = "507f1f77bcf86cd799439099";
    let update = update_document(
        UpdateKind::Remove,
        &format!("orders.id:{HEX}.lines.id:{target}"),
        None,
    )
    .unwrap();
    assert_eq!(
        update.document,
        json!({ "$pull": { "orders.$[a].lines": { "_id": oid(target) } } })
    );
    assert_eq!(update.array_filters, vec![json!({ "a._id": oid(HEX) })]);

    // A bare final segment removes by payload match and keeps all filters.
    let update = update_document(
        UpdateKind::Remove,
        &format!("orders.id:{HEX}.lines"),
        Some(json!({"sku": "abc"})),
    )
    .unwrap();
    assert_eq!(
        update.document,
        json!({ "$pull": { "orders.$[a].lines": { "sku": "abc" } } })
    );
    assert_eq!(update.array_filters.len(), 1);
}

#[test]
fn update_deep_nesting_matrix() {
    // Eleven identifier-bearing levels plus a final field; placeholder
    // names must run a..k with no ceiling at ten.
    let levels: Vec<String> = (1..=11)
        .map(|i| format!("level{i}.id:507f1f77bcf86cd79943{i:04}"))
        .collect();
    let path = format!("{}.finalField", levels.join("."));

    let update =
        update_document(UpdateKind::Update, &path, Some(json!({"value": "deep"}))).unwrap();

    assert_eq!(update.array_filters.len(), 11);
    let expected_keys = [
        "a._id", "b._id", "c._id", "d._id", "e._id", "f._id", "g._id", "h._id", "i._id", "j._id",
        "k._id",
    ];
    for (filter, expected) in update.array_filters.iter().zip(expected_keys) {
        let obj = filter.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key(expected), "missing {expected} in {filter}");
    }

    let dotted = "level1.$[a].level2.$[b].level3.$[c].level4.$[d].level5.$[e].level6.$[f].\
                  level7.$[g].level8.$[h].level9.$[i].level10.$[j].level11.$[k].finalField";
    assert_eq!(
        update.document,
        json!({ "$set": { dotted: { "value": "deep" } } })
    );
}

#[test]
fn update_fifteen_levels_matrix() {
    let levels: Vec<String> = (1..=15)
        .map(|i| format!("level{i}.id:507f1f77bcf86cd79943{i:04}"))
        .collect();
    let path = format!("{}.finalField", levels.join("."));

    let update =
        update_document(UpdateKind::Update, &path, Some(json!({"value": "extreme"}))).unwrap();

    assert_eq!(update.array_filters.len(), 15);
    let first = update.array_filters[0].as_object().unwrap();
    assert!(first.contains_key("a._id"));
    let last = update.array_filters[14].as_object().unwrap();
    assert!(last.contains_key("o._id"));

    // All placeholders distinct, in generator order.
    for (index, filter) in update.array_filters.iter().enumerate() {
        let key = filter.as_object().unwrap().keys().next().unwrap().clone();
        assert_eq!(key, format!("{}._id", placeholder_name(index)));
    }
}

#[test]
fn update_determinism_matrix() {
    let path = format!("items.id:{HEX}.name");
    let payload = json!({"v": 1});
    let first = update_document(UpdateKind::Update, &path, Some(payload.clone())).unwrap();
    let second = update_document(UpdateKind::Update, &path, Some(payload)).unwrap();
    assert_eq!(first, second);

    // Placeholder names depend on position, not payload content.
    let other = update_document(UpdateKind::Update, &path, Some(json!({"v": 2}))).unwrap();
    assert_eq!(first.array_filters, other.array_filters);
}

#[test]
fn update_operation_kind_matrix() {
    assert_eq!("create".parse::<UpdateKind>().unwrap(), UpdateKind::Create);
    assert_eq!("update".parse::<UpdateKind>().unwrap(), UpdateKind::Update);
    assert_eq!("remove".parse::<UpdateKind>().unwrap(), UpdateKind::Remove);
    assert_eq!(
        "invalid".parse::<UpdateKind>(),
        Err(PathError::InvalidOperation("invalid".to_string()))
    );
    assert_eq!(
        "invalid".parse::<UpdateKind>().unwrap_err().to_string(),
        "Type must be one of: create, update, remove"
    );
}

#[test]
fn update_error_matrix() {
    assert_eq!(
        update_document(UpdateKind::Create, "", Some(json!({}))),
        Err(PathError::EmptyPath)
    );
    assert_eq!(
        update_document(UpdateKind::Create, ".invalid", Some(json!({}))),
        Err(PathError::InvalidSegment(String::new()))
    );
    // Invalid identifiers fail for every kind, including the remove-final
    // special case.
    for kind in [UpdateKind::Create, UpdateKind::Update, UpdateKind::Remove] {
        assert_eq!(
            update_document(kind, "items.id:xyz", None),
            Err(PathError::InvalidObjectId("xyz".to_string())),
            "kind {kind:?}"
        );
    }
    assert_eq!(
        update_document(UpdateKind::Remove, &format!("a.id:{HEX}.b.id:short"), None),
        Err(PathError::InvalidObjectId("short".to_string()))
    );
}

#[test]
fn update_compiled_options_shape_matrix() {
    let update = CompiledUpdate {
        document: json!({}),
        array_filters: vec![json!({ "a._id": oid(HEX) })],
    };
    assert_eq!(
        update.options(),
        json!({ "arrayFilters": [{ "a._id": { "$oid": HEX } }] })
    );
}
