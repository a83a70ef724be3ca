use calendar_macros::value_object;

#[value_object(string)]
struct Label(String);

#[value_object]
struct Window {
    minutes: u32,
}

#[value_object(debug = false)]
struct Secret(String);

#[value_object]
enum Visibility {
    Private,
    Shared,
}

fn main() {
    let label = Label("standup".to_string());
    assert_eq!(label.as_str(), "standup");
    assert_eq!(label.to_string(), "standup");
    let s: &str = label.as_ref();
    assert_eq!(s, "standup");
    let owned: String = label.clone().into();
    assert_eq!(owned, "standup");

    let w = Window { minutes: 30 };
    assert_eq!(format!("{:?}", w.clone()), "Window { minutes: 30 }");
    assert!(w == Window { minutes: 30 });

    // debug = false：只要求可构造、可比较
    assert!(Secret("x".into()) == Secret("x".into()));

    assert!(Visibility::Private != Visibility::Shared);
}
