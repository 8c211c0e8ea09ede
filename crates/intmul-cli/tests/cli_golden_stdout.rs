use assert_cmd::cargo::cargo_bin_cmd;

fn run(backend: &str, stdin: &str) -> String {
    let mut cmd = cargo_bin_cmd!("intmul");
    cmd.args(["--backend", backend]).write_stdin(stdin);

    let output = cmd.assert().success().code(0).get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn process_backend_golden_products() {
    assert_eq!(run("process", "1a2b\n3c4d\n"), "0629f2ef\n");
    assert_eq!(run("process", "f\nf\n"), "e1\n");
    assert_eq!(run("process", "0000\n1234\n"), "00000000\n");
}

#[test]
fn thread_backend_golden_products() {
    assert_eq!(run("thread", "1a2b\n3c4d\n"), "0629f2ef\n");
    assert_eq!(run("thread", "f\nf\n"), "e1\n");
    assert_eq!(run("thread", "0000\n1234\n"), "00000000\n");
    assert_eq!(run("thread", "FFFFFFFF\nffffffff\n"), "fffffffe00000001\n");
}

#[test]
fn default_backend_is_process_and_accepts_missing_final_newline() {
    let mut cmd = cargo_bin_cmd!("intmul");
    cmd.write_stdin("1A2B\n3C4D");

    cmd.assert().success().stdout("0629f2ef\n");
}

#[test]
fn unit_mode_writes_unpadded_product() {
    let mut cmd = cargo_bin_cmd!("intmul");
    cmd.args(["--unit", "--backend", "thread"]).write_stdin("1a2b\n3c4d\n");

    cmd.assert().success().stdout("629f2ef\n");
}
