use std::{
    io::{stderr, stdout, Write},
    process::{Command, Output, Stdio},
};
use tempfile::NamedTempFile;

fn execute(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tinyemu"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start tinyemu");

    {
        let mut input = child.stdin.take().unwrap();
        input.write_all(stdin.unwrap_or("").as_bytes()).unwrap();
    }

    child.wait_with_output().unwrap()
}

fn run(program: &str, extra_args: &[&str], expected_output: &str) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(program.as_bytes()).unwrap();

    let path = file.path().to_str().unwrap();
    let mut args = vec![path];
    args.extend_from_slice(extra_args);

    let output = execute(&args, None);

    if !output.status.success() {
        stdout().write_all(&output.stdout).unwrap();
        stderr().write_all(&output.stderr).unwrap();
        panic!("Execution resulted in status {:?}", output.status.code());
    }

    let result = String::from_utf8(output.stdout)
        .unwrap()
        .replace("\r\n", "\n");

    assert_eq!(result, expected_output);
}

const ADD_PROGRAM: &str = ".data\n.code\n_start:\nmov al 5\nmov bl 3\nadd al bl\ncall exitprocess\nend _start\n";

#[test]
fn add() {
    run(
        ADD_PROGRAM,
        &[],
        "eax 00000008\nebx 00000003\necx 00000000\nedx 00000000\n\
         esi 00000000\nedi 00000000\nebp 00000000\nesp 00000000\n\
         ds  002B\nes  002B\nfs  0053\ngs  002B\nss  002B\ncs  0023\n\
         eip 00401019\n",
    );
}

#[test]
fn summary() {
    run(
        ".data\nfactor db 7\n.code\n_start:\nmov al 6\nmov bl factor\nmul bl\ncall exitprocess\nend _start\n",
        &["--summary"],
        "eax 0000002A\nebx 00000007\necx 00000000\nedx 00000000\n\
         esi 00000000\nedi 00000000\nebp 00000000\nesp 00000000\n\
         ds  002B\nes  002B\nfs  0053\ngs  002B\nss  002B\ncs  0023\n\
         eip 00401019\n\
         al=42, bl=7, cl=0, dl=0, el=0, fl=0, gl=0, hl=0\n",
    );
}

#[test]
fn missing_sections() {
    run(
        "_start:\nmov al 5\n",
        &[],
        "eax 00000000\nebx 00000000\necx 00000000\nedx 00000000\n\
         esi 00000000\nedi 00000000\nebp 00000000\nesp 00000000\n\
         ds  002B\nes  002B\nfs  0053\ngs  002B\nss  002B\ncs  0023\n\
         eip 00401000\n\
         Missing element(s): .data, .code, end _start\n",
    );
}

#[test]
fn program_can_be_read_from_stdin() {
    let output = execute(&["-"], Some(ADD_PROGRAM));

    assert!(output.status.success());
    let result = String::from_utf8(output.stdout).unwrap();
    assert!(result.starts_with("eax 00000008\n"));
}

#[test]
fn default_dump() {
    let output = execute(&["--default"], None);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), tinyemu::DEFAULT_DUMP);
}

#[test]
fn faults_exit_with_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b".data\n.code\n_start:\nmov eax 1\nend _start\n")
        .unwrap();

    let output = execute(&[file.path().to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let error = String::from_utf8(output.stderr).unwrap();
    assert!(error.contains("code line 2: unknown register `eax`"));
}

#[test]
fn unreadable_file_exits_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.asm");

    let output = execute(&[missing.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
}
