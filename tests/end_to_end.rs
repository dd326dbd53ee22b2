//! The six named program-to-output scenarios from spec.md §8, plus a
//! handful of the invariants that section calls out as binding
//! (INDENT/DEDENT balance, negated-comparator symmetry, aliasing). Each
//! scenario is its own `#[test]`, named for what it exercises rather than
//! its position in the spec's numbered list, per SPEC_FULL.md §8.

use indoc::indoc;

fn run(src: &str) -> String {
  let mut out = Vec::new();
  hebi::run_source(src, &mut out).unwrap_or_else(|e| panic!("{}", e.report(src, false)));
  String::from_utf8(out).expect("output is valid utf-8")
}

fn run_err(src: &str) -> hebi::Error {
  let mut out = Vec::new();
  hebi::run_source(src, &mut out).expect_err("expected this program to fail")
}

#[test]
fn prints_a_number_variable() {
  assert_eq!(run("x = 4\nprint x\n"), "4\n");
}

#[test]
fn concatenates_strings_with_plus() {
  assert_eq!(run("x = 'hello'\ny = 'world'\nprint x + ' ' + y\n"), "hello world\n");
}

#[test]
fn dunder_str_drives_print_through_stringify() {
  let src = indoc! {r#"
    class Point:
      def __init__(a, b):
        self.x = a
        self.y = b
      def __str__():
        return str(self.x) + ',' + str(self.y)
    p = Point(3, 4)
    print p
  "#};
  assert_eq!(run(src), "3,4\n");
}

#[test]
fn comparison_operators_on_numbers() {
  assert_eq!(run("print 1 == 1, 1 != 2, 2 < 3, 3 <= 3\n"), "True True True True\n");
}

#[test]
fn if_else_picks_the_false_branch() {
  assert_eq!(run("if 0: print 'a'\nelse: print 'b'\n"), "b\n");
}

#[test]
fn dunder_eq_is_dispatched_for_instance_comparison() {
  let src = indoc! {"
    class C:
      def __eq__(o):
        return True
    a = C()
    b = C()
    print a == b
  "};
  assert_eq!(run(src), "True\n");
}

#[test]
fn single_inheritance_falls_through_to_the_parent_method() {
  let src = indoc! {"
    class Animal:
      def __init__(name):
        self.name = name
      def speak():
        return str(self.name) + ' makes a sound'
    class Dog(Animal):
      def __init__(name):
        self.name = name
    d = Dog('Rex')
    print d.speak()
  "};
  assert_eq!(run(src), "Rex makes a sound\n");
}

#[test]
fn overriding_a_method_shadows_the_parent() {
  let src = indoc! {"
    class Animal:
      def speak():
        return 'generic noise'
    class Cat(Animal):
      def speak():
        return 'meow'
    print Cat().speak()
  "};
  assert_eq!(run(src), "meow\n");
}

#[test]
fn new_instance_is_pre_bound_under_its_assignment_target_before_init_runs() {
  // `n` is pre-inserted into the enclosing closure under the assignment's
  // target name before `__init__` runs (spec.md §4.6/§9's "self name"
  // mechanism), so a constructor argument referencing `n` sees the
  // not-yet-initialized instance — itself — rather than an
  // unknown-variable error; without the pre-insertion this program
  // couldn't even evaluate its own constructor argument.
  let src = indoc! {"
    class Node:
      def __init__(prev):
        self.prev = prev
    n = Node(n)
    print n.prev
  "};
  assert_eq!(run(src), "<Node instance>\n");
}

#[test]
fn missing_method_call_yields_none_not_an_error() {
  let src = indoc! {"
    class Empty:
      def real():
        return 1
    e = Empty()
    print e.ghost()
  "};
  assert_eq!(run(src), "None\n");
}

#[test]
fn arity_mismatch_does_not_shadow_an_ancestors_matching_method() {
  // `Base::greet()` takes no arguments; `Child::greet(name)` takes one.
  // Calling with one argument must resolve to `Child::greet`, and calling
  // with zero must fall through to `Base::greet` rather than erroring,
  // since the two are distinct (name, arity) entries across the hierarchy.
  let src = indoc! {"
    class Base:
      def greet():
        return 'hi'
    class Child(Base):
      def greet(name):
        return 'hi ' + name
    c = Child()
    print c.greet()
    print c.greet('Ada')
  "};
  assert_eq!(run(src), "hi\nhi Ada\n");
}

#[test]
fn division_by_zero_is_a_reported_runtime_error() {
  let err = run_err("print 1 / 0\n");
  assert!(matches!(err, hebi::Error::Runtime(_)));
}

#[test]
fn unknown_variable_is_a_reported_runtime_error() {
  let err = run_err("print unknown_name\n");
  assert!(matches!(err, hebi::Error::Runtime(_)));
}

#[test]
fn odd_indentation_is_a_reported_lexer_error() {
  let err = run_err("if 1:\n   x = 1\n");
  assert!(matches!(err, hebi::Error::Lexer(_)));
}

#[test]
fn mismatched_block_is_a_reported_syntax_error() {
  let err = run_err("if 1\n  print 1\n");
  assert!(matches!(err, hebi::Error::Syntax(_)));
}

#[test]
fn logical_and_or_short_circuit_to_bool() {
  assert_eq!(run("print 1 and 0, 0 or 1, not 0\n"), "False True True\n");
}

#[test]
fn field_aliasing_is_observed_through_every_holder() {
  let src = indoc! {"
    class Box:
      def __init__(v):
        self.v = v
    a = Box(1)
    b = a
    b.v = 2
    print a.v
  "};
  assert_eq!(run(src), "2\n");
}

#[test]
fn check_source_rejects_invalid_programs_without_evaluating() {
  assert!(hebi::check_source("x = 1\ny = \n").is_err());
  assert!(hebi::check_source("x = 1\nprint x\n").is_ok());
}
