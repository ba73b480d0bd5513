use std::io::Cursor;

use snip_console::Console;
use snip_generator::SeqGenerator;
use snip_registry::Registry;

fn run_session(script: &str) -> (String, Registry<SeqGenerator>) {
    let mut registry = Registry::with_generator(SeqGenerator::new());
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.run(&mut registry).unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    (output, registry)
}

#[test]
fn shorten_then_expand() {
    let (output, registry) = run_session(
        "1\nhttps://example.com/page\n2\nhttp://miacortador.com/AAAAAA\n3\n",
    );

    assert!(output.starts_with("--- Welcome to the console URL shortener ---\n"));
    assert!(output.contains("Result: URL shortened successfully.\n"));
    assert!(output.contains("Your short URL is: http://miacortador.com/AAAAAA\n"));
    assert!(output.contains("Result: URL expanded successfully.\n"));
    assert!(output.contains("The original URL is: https://example.com/page\n"));
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn repeated_shorten_reports_existing_code() {
    let (output, registry) = run_session(
        "1\nhttps://example.com\n1\nhttps://example.com\n3\n",
    );

    assert!(output.contains("Result: This URL had already been shortened.\n"));
    assert_eq!(
        output
            .matches("Your short URL is: http://miacortador.com/AAAAAA\n")
            .count(),
        2
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn errors_are_reported_and_the_menu_continues() {
    let (output, registry) = run_session(
        "1\nftp://example.com\n2\nhttp://miacortador.com/doesnotexist\n2\n\n9\n3\n",
    );

    assert!(output.contains(
        "Result: Error: the URL must start with http:// or https://: ftp://example.com\n"
    ));
    assert!(output.contains("Result: Error: short URL does not exist: doesnotexist\n"));
    assert!(output.contains("Result: Error: invalid short URL format: \"\"\n"));
    assert!(output.contains("Invalid option. Please choose 1, 2 or 3.\n"));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(registry.is_empty());
}

#[test]
fn input_is_trimmed() {
    let (output, registry) = run_session("  1 \r\n  https://example.com  \r\n3\r\n");

    assert!(output.contains("Your short URL is: http://miacortador.com/AAAAAA\n"));
    assert!(registry.code_for("https://example.com").is_some());
}

#[test]
fn end_of_input_exits() {
    let (output, _) = run_session("1\nhttps://example.com\n");
    assert!(output.ends_with("Goodbye!\n"));

    let (output, registry) = run_session("1\n");
    assert!(output.ends_with("Goodbye!\n"));
    assert!(registry.is_empty());

    let (output, _) = run_session("");
    assert!(output.ends_with("Goodbye!\n"));
}
