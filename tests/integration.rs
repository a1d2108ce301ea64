use feedbox::{
    App, Config, Interaction, KnownUser, SessionState, SignInCredentials, SignUpCredentials,
    Submission,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("feedbox=debug")
        .with_test_writer()
        .try_init();
}

fn demo_table() -> Vec<KnownUser> {
    vec![
        KnownUser {
            id: "1".to_string(),
            email: "demo@example.com".to_string(),
            username: "demo".to_string(),
            password: "demo123".to_string(),
        },
        KnownUser {
            id: "2".to_string(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password: "wonderland".to_string(),
        },
    ]
}

fn app() -> App {
    App::new(Config::default(), demo_table(), Vec::new())
}

#[test]
fn test_full_user_flow() {
    init_tracing();
    let mut app = app();

    // 1. Sign in with a seeded account
    assert!(app.sign_in(&SignInCredentials::new("demo@example.com", "demo123")));
    assert_eq!(app.current_user().unwrap().username, "demo");

    // 2. Compose
    let post = app
        .create_post("first post", Some("😊"))
        .expect("signed in")
        .expect("non-blank")
        .clone();
    assert_eq!(app.posts()[0], post);
    assert_eq!(post.content, "first post");
    assert_eq!(post.emoji.as_deref(), Some("😊"));

    // 3. Sign out
    app.sign_out();
    assert_eq!(app.session(), &SessionState::SignedOut);
}

#[test]
fn test_every_known_account_can_sign_in() {
    let table = demo_table();
    for known in &table {
        let mut app = app();
        assert!(app.sign_in(&SignInCredentials::new(&known.email, &known.password)));
        let user = app.current_user().unwrap();
        assert_eq!(user.email, known.email);
        assert_eq!(user.id, known.id);
    }
}

#[test]
fn test_rejected_sign_in_leaves_state_alone() {
    let mut app = app();
    assert!(!app.sign_in(&SignInCredentials::new("demo@example.com", "wrong")));
    assert!(!app.sign_in(&SignInCredentials::new("nobody@example.com", "demo123")));
    // Password of one account with the email of another
    assert!(!app.sign_in(&SignInCredentials::new("alice@example.com", "demo123")));
    assert_eq!(app.session(), &SessionState::SignedOut);

    assert!(app.sign_in(&SignInCredentials::new("alice@example.com", "wonderland")));
    let before = app.session().clone();
    assert!(!app.sign_in(&SignInCredentials::new("demo@example.com", "")));
    assert_eq!(app.session(), &before);
}

#[test]
fn test_sign_up_rules() {
    let mut app = app();

    assert!(!app.sign_up(&SignUpCredentials::new("new@example.com", "abc", "abd")));
    assert!(!app.session().is_authenticated());

    assert!(!app.sign_up(&SignUpCredentials::new("demo@example.com", "x", "x")));
    assert!(!app.sign_up(&SignUpCredentials::new("demo@example.com", "demo123", "demo123")));
    assert!(!app.session().is_authenticated());

    assert!(app.sign_up(&SignUpCredentials::new("carol.smith@mail.org", "pw", "pw")));
    let user = app.current_user().unwrap();
    assert!(app.session().is_authenticated());
    assert_eq!(user.username, "carol.smith");
    assert_eq!(user.email, "carol.smith@mail.org");
}

#[test]
fn test_signed_up_account_cannot_sign_in_again() {
    let mut app = app();
    assert!(app.sign_up(&SignUpCredentials::new("bob@example.com", "pw", "pw")));
    app.sign_out();
    assert!(!app.sign_in(&SignInCredentials::new("bob@example.com", "pw")));
    // Nor is the email reserved: signing up again works
    assert!(app.sign_up(&SignUpCredentials::new("bob@example.com", "pw", "pw")));
}

#[test]
fn test_sign_up_ids_are_unique() {
    let mut app = app();
    assert!(app.sign_up(&SignUpCredentials::new("x@example.com", "pw", "pw")));
    let first = app.current_user().unwrap().id.clone();
    assert!(app.sign_up(&SignUpCredentials::new("x@example.com", "pw", "pw")));
    let second = app.current_user().unwrap().id.clone();
    assert_ne!(first, second);
    assert_ne!(first, "1");
    assert_ne!(first, "2");
}

#[test]
fn test_sign_out_is_idempotent() {
    let mut app = app();
    app.sign_out();
    assert_eq!(app.session(), &SessionState::SignedOut);

    assert!(app.sign_in(&SignInCredentials::new("demo@example.com", "demo123")));
    app.sign_out();
    let once = app.session().clone();
    app.sign_out();
    assert_eq!(app.session(), &once);
    assert!(app.current_user().is_none());
}

#[test]
fn test_post_content_validation() {
    let mut app = App::demo();
    assert!(app.sign_in(&SignInCredentials::new("demo@example.com", "password123")));
    let before = app.posts().len();

    assert_eq!(app.create_post("", None), Ok(None));
    assert_eq!(app.create_post("   ", Some("🎉")), Ok(None));
    assert_eq!(app.posts().len(), before);
}

#[test]
fn test_compose_as_alice() {
    let mut app = App::demo();
    let known = KnownUser {
        id: "a".to_string(),
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        password: "pw".to_string(),
    };
    let seed = app.posts().to_vec();
    app = App::new(Config::default(), vec![known], seed);
    assert!(app.sign_in(&SignInCredentials::new("alice@example.com", "pw")));

    let before = app.posts().len();
    app.create_post("hello", None).unwrap();
    let posts = app.posts();
    assert_eq!(posts.len(), before + 1);
    let head = &posts[0];
    assert_eq!(head.content, "hello");
    assert_eq!(head.author.username, "alice");
    assert_eq!(head.author.name, "alice");
    assert_eq!((head.likes, head.comments, head.shares), (0, 0, 0));
    // Seed order is preserved behind the new post
    assert_eq!(posts[1].id, "1");
    assert_eq!(posts[3].id, "3");
}

#[test]
fn test_signed_out_cannot_compose() {
    let mut app = App::demo();
    assert_eq!(app.gate(), Interaction::RequireSignIn);
    assert_eq!(app.submit_post("hello", None), Submission::RequireSignIn);
    assert_eq!(app.create_post("hello", None), Err(feedbox::ApiError::Unauthorized));
    assert_eq!(app.posts().len(), 3);
}

#[test]
fn test_editor_submission() {
    let mut app = App::demo();
    assert!(app.sign_in(&SignInCredentials::new("test@user.com", "testpass")));
    assert_eq!(app.gate(), Interaction::Proceed);

    assert_eq!(app.submit_post(" \t ", None), Submission::Ignored);
    let id = match app.submit_post("from the editor", Some("😎")) {
        Submission::Posted(id) => id,
        other => panic!("expected a post, got {:?}", other),
    };
    assert_eq!(app.posts()[0].id, id);
    assert_eq!(app.time_ago(&app.posts()[0]).unwrap(), "now");
    assert_eq!(app.time_ago(&app.posts()[1]).unwrap(), "5 mins ago");
}

#[test]
fn test_try_sign_in_and_up_report_reasons() {
    let mut app = app();
    assert_eq!(
        app.try_sign_in(&SignInCredentials::new("demo@example.com", "nope")),
        Err(feedbox::ApiError::Unauthorized)
    );
    assert!(matches!(
        app.try_sign_up(&SignUpCredentials::new("z@example.com", "a", "b")),
        Err(feedbox::ApiError::BadRequest(_))
    ));
    assert_eq!(
        app.try_sign_up(&SignUpCredentials::new("z@example.com", "a", "a"))
            .unwrap()
            .username,
        "z"
    );
    assert_eq!(
        app.try_sign_in(&SignInCredentials::new("demo@example.com", "demo123"))
            .unwrap()
            .username,
        "demo"
    );
}

#[test]
fn test_independent_apps_do_not_share_state() {
    let mut a = app();
    let b = app();
    assert!(a.sign_in(&SignInCredentials::new("demo@example.com", "demo123")));
    a.create_post("only in a", None).unwrap();
    assert!(!b.session().is_authenticated());
    assert!(b.posts().is_empty());
}

#[test]
fn test_snapshot_shape() {
    let mut app = App::demo();
    let snap = app.snapshot().unwrap();
    assert_eq!(snap["session"], json!({"isAuthenticated": false, "user": null}));
    assert_eq!(snap["posts"].as_array().unwrap().len(), 3);

    assert!(app.sign_in(&SignInCredentials::new("demo@example.com", "password123")));
    let snap = app.snapshot().unwrap();
    assert_eq!(snap["session"]["isAuthenticated"], true);
    assert_eq!(snap["session"]["user"]["username"], "demo");
    assert!(snap["session"]["user"].get("password").is_none());
}

#[test]
fn test_fallback_avatar_and_config() {
    let app = App::demo();
    let avatar = app.fallback_avatar(&app.posts()[0]);
    assert_eq!(
        avatar,
        "https://ui-avatars.com/api/?name=Theresa%20Webb&background=6b7280&color=fff&size=150"
    );
    assert_eq!(app.config().emoji_palette.len(), 8);

    let config = Config::from_json(r#"{"default_emoji": "🎉"}"#).unwrap();
    assert_eq!(config.default_emoji, "🎉");
    assert_eq!(config.post_avatar, Config::default().post_avatar);
    assert!(Config::from_json(r#"{"default_emoji": "🦀"}"#).is_err());
}
