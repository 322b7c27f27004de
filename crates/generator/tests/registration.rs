use rgen_generator::{
    DEFAULT_RULE_FQN_PATTERN, GeneratorError, Placeholder, PlaceholderMap, Registration,
    append_rule_registration,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SET_FILE: &str = r"<?php

declare(strict_types=1);

use Rector\Config\RectorConfig;

return static function (RectorConfig $rectorConfig): void {
    $rectorConfig->rule(\Rector\Php80\Rector\Class_\ClassPropertyAssignToConstructorPromotionRector::class);
    $rectorConfig->rule(\Rector\Php80\Rector\FuncCall\ClassOnObjectRector::class);
};
";

fn identity(name: &str) -> PlaceholderMap {
    [(Placeholder::Package, "Php80"), (Placeholder::Category, "Enum"), (Placeholder::Name, name)]
        .into_iter()
        .collect()
}

fn set_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("php80.php");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_new_rule_is_inserted_once_in_order() {
    let (_dir, path) = set_file(SET_FILE);

    let outcome = append_rule_registration(&path, &identity("ClassConstantToEnumRector"), DEFAULT_RULE_FQN_PATTERN)
        .unwrap();
    assert_eq!(outcome, Registration::Added);

    let patched = read(&path);
    assert_eq!(patched.matches("$rectorConfig->rule(").count(), 3);
    assert_eq!(patched.matches("ClassConstantToEnumRector").count(), 1);

    let promotion = patched.find("ClassPropertyAssignToConstructorPromotionRector").unwrap();
    let on_object = patched.find("ClassOnObjectRector").unwrap();
    let added = patched.find(r"\Rector\Php80\Rector\Enum\ClassConstantToEnumRector::class").unwrap();
    assert!(promotion < on_object && on_object < added);
    assert!(patched.ends_with("ClassConstantToEnumRector::class);\n};\n"));
}

#[test]
fn test_second_registration_is_a_no_op() {
    let (_dir, path) = set_file(SET_FILE);
    let placeholders = identity("ClassConstantToEnumRector");

    append_rule_registration(&path, &placeholders, DEFAULT_RULE_FQN_PATTERN).unwrap();
    let once = fs::read(&path).unwrap();

    let outcome = append_rule_registration(&path, &placeholders, DEFAULT_RULE_FQN_PATTERN).unwrap();
    assert_eq!(outcome, Registration::AlreadyPresent);
    assert_eq!(fs::read(&path).unwrap(), once);
}

#[test]
fn test_already_listed_rule_is_left_alone() {
    let content = SET_FILE.replace("Class_\\ClassProperty", "Enum\\ClassProperty");
    let (_dir, path) = set_file(&content);

    let outcome = append_rule_registration(
        &path,
        &identity("ClassPropertyAssignToConstructorPromotionRector"),
        DEFAULT_RULE_FQN_PATTERN,
    )
    .unwrap();

    assert_eq!(outcome, Registration::AlreadyPresent);
    assert_eq!(read(&path), content);
}

#[test]
fn test_name_contained_in_a_longer_registration_counts_as_present() {
    let content = SET_FILE.replace("FuncCall\\ClassOnObjectRector", "Enum\\ClassOnObjectRectorLegacy");
    let (_dir, path) = set_file(&content);

    let outcome =
        append_rule_registration(&path, &identity("ClassOnObjectRector"), DEFAULT_RULE_FQN_PATTERN).unwrap();

    assert_eq!(outcome, Registration::AlreadyPresent);
    assert_eq!(read(&path), content);
}

#[test]
fn test_missing_keys_fail_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("does-not-exist.php");
    let placeholders: PlaceholderMap = [(Placeholder::Category, "Enum")].into_iter().collect();

    let err = append_rule_registration(&absent, &placeholders, DEFAULT_RULE_FQN_PATTERN).unwrap_err();

    assert!(matches!(err, GeneratorError::MissingData { .. }));
    assert_eq!(
        err.to_string(),
        r#"Missing data: Template variables for "__Package__", "__Name__" keys are missing"#
    );
}

#[test]
fn test_foreign_file_is_untouched() {
    let content = "<?php\n\nreturn ['rules' => []];\n";
    let (_dir, path) = set_file(content);

    let err = append_rule_registration(&path, &identity("SomeRector"), DEFAULT_RULE_FQN_PATTERN).unwrap_err();

    assert!(matches!(err, GeneratorError::PatternNotFound { context: Some(_), .. }));
    assert_eq!(read(&path), content);
}

#[test]
fn test_unreadable_target_reports_io() {
    let dir = tempfile::tempdir().unwrap();
    let err = append_rule_registration(dir.path().join("nope.php"), &identity("SomeRector"), DEFAULT_RULE_FQN_PATTERN)
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Io { context: Some(_), .. }));
}

#[test]
fn test_custom_pattern_decides_the_registered_name() {
    let (_dir, path) = set_file(SET_FILE);

    append_rule_registration(&path, &identity("SomeRector"), r"Acme\Rules\__Category__\__Name__").unwrap();

    assert!(read(&path).contains(r"    $rectorConfig->rule(\Acme\Rules\Enum\SomeRector::class);"));
}
