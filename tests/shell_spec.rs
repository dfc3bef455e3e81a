use itemforge::AppResult;
use itemforge::export::{Clipboard, DISABLED_HINT};
use itemforge::lua::check_snippet;
use itemforge::models::{Anim, Prop, Target};
use itemforge::shell::{CommandError, Reply, Shell};
use itemforge::{DomainError, Session};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

#[derive(Clone, Default)]
struct FakeClipboard(Rc<RefCell<Vec<String>>>);

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct Broken;

impl Clipboard for Broken {
    fn set_text(&mut self, _text: &str) -> AppResult<()> {
        Err(DomainError::Clipboard("no display".into()))
    }
}

fn shell_in(dir: &Path) -> (Shell, FakeClipboard) {
    let cb = FakeClipboard::default();
    let shell = Shell::new(Session::new(Target::Ox), dir.to_path_buf(), Box::new(cb.clone()), true);
    (shell, cb)
}

fn run(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn burger_session_downloads_both_targets() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, _) = shell_in(dir.path());

    let out = run(
        &mut shell,
        r#"
set name burger
set label "Tasty Burger"
set weight 220
set useable yes
preset food
set client.prop.pos.z 0.1
download
target qb
download
"#,
    );

    assert!(!out.contains("error:"), "{}", out);
    assert!(out.contains("applied food preset"));

    let record = shell.session().record();
    assert_eq!(record.client.status.hunger, Some(200000));
    assert_eq!(record.client.usetime, Some(3000));
    let Some(Prop::Detailed(prop)) = &record.client.prop else { panic!("expected detailed prop") };
    assert_eq!(prop.model, "prop_cs_burger_01");
    assert_eq!(prop.pos.z, 0.1);

    let ox = fs::read_to_string(dir.path().join("burger_ox_inventory.lua")).unwrap();
    assert!(ox.starts_with("-- Add this to ox_inventory/data/items.lua"));
    assert!(ox.contains("\t\t\t\tpos = vec3(0.01, 0.01, 0.1),\n"));
    check_snippet(Target::Ox, &ox).unwrap();

    let qb = fs::read_to_string(dir.path().join("burger_qb_inventory.lua")).unwrap();
    assert!(qb.contains("label = 'Tasty Burger', weight = 220,"));
    check_snippet(Target::Qb, &qb).unwrap();
}

#[test]
fn download_is_gated() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, cb) = shell_in(dir.path());

    let out = run(&mut shell, "set label Orphan\ndownload\ncopy\n");
    assert_eq!(out.matches(DISABLED_HINT).count(), 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(cb.0.borrow().is_empty());
}

#[test]
fn copy_uses_active_target() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, cb) = shell_in(dir.path());

    run(&mut shell, "set name radio\nset label Radio\ncopy\ntarget qb\ncopy\n");

    let copied = cb.0.borrow();
    assert_eq!(copied.len(), 2);
    assert!(copied[0].contains("['radio'] = {"));
    assert!(copied[1].contains("QBShared.Items = {"));
}

#[test]
fn clipboard_failure_leaves_record_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::new(Session::new(Target::Ox), dir.path().to_path_buf(), Box::new(Broken), false);

    shell.execute("set name radio").unwrap();
    shell.execute("set label Radio").unwrap();
    let err = shell.execute("copy").unwrap_err();
    assert!(matches!(err, CommandError::Domain(DomainError::Clipboard(_))));
    assert_eq!(shell.session().record().label, "Radio");
}

#[test]
fn anim_form_switching() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, _) = shell_in(dir.path());

    shell.execute("set client.anim eating").unwrap();
    assert_eq!(shell.session().record().client.anim, Some(Anim::Simple("eating".into())));
    assert!(shell.execute("set client.anim.clip loop").is_err());

    shell.execute("set client.anim.dict mp_player_inteat").unwrap();
    shell.execute("set client.anim.clip loop_eat").unwrap();
    assert_eq!(
        shell.session().record().client.anim,
        Some(Anim::Detailed { dict: "mp_player_inteat".into(), clip: "loop_eat".into() })
    );

    // clearing the dict removes the whole animation
    shell.execute("set client.anim.dict ''").unwrap();
    assert_eq!(shell.session().record().client.anim, None);
}

#[test]
fn save_reset_load() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, _) = shell_in(dir.path());
    let file = dir.path().join("lockpick.yaml");

    shell.execute("set name lockpick").unwrap();
    shell.execute("set label Lockpick").unwrap();
    shell.execute("button add").unwrap();
    shell.execute("button 0 label Pick").unwrap();
    shell.execute("button 0 action pick_lock").unwrap();
    let saved = shell.session().record().clone();

    shell.execute(&format!("save '{}'", file.display())).unwrap();
    shell.execute("reset").unwrap();
    assert_eq!(shell.session().record().name, "");

    shell.execute(&format!("load '{}'", file.display())).unwrap();
    assert_eq!(shell.session().record(), &saved);

    // undo goes back to the blank record
    assert_eq!(shell.execute("undo").unwrap(), Reply::Text("undone".into()));
    assert_eq!(shell.session().record().name, "");
}

#[test]
fn check_reports_lua_ok() {
    let dir = tempfile::tempdir().unwrap();
    let (mut shell, _) = shell_in(dir.path());
    shell.execute("set name x").unwrap();
    assert_eq!(shell.execute("check").unwrap(), Reply::Text("lua ok".into()));
}
