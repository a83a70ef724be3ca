use calendar_macros::entity_id;
use std::collections::HashSet;
use uuid::Uuid;

#[entity_id]
#[derive(Copy)]
struct OwnerId(Uuid);

fn main() {
    let raw = Uuid::new_v4();
    let id = OwnerId::new(raw);
    let copied = id;

    assert_eq!(id, copied);
    assert_eq!(id.to_string(), raw.to_string());
    assert_eq!(id.as_ref(), &raw);

    let parsed: OwnerId = raw.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<OwnerId>().is_err());

    let back: Uuid = id.into();
    assert_eq!(back, raw);
    assert_eq!(OwnerId::from(raw).into_inner(), raw);

    let mut set = HashSet::new();
    set.insert(id);
    assert!(set.contains(&copied));
}
