use osc_path_tree::{MatchError, PathTree};

macro_rules! match_tests {
    ($($name:ident {
        patterns = $patterns:expr,
        $( $address:literal :: $pattern:literal => $( $(@$none:tt)? None )? $( $(@$some:tt)? Some )? ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut tree = PathTree::new();

            for pattern in $patterns {
                tree.insert(pattern, pattern.to_owned()).unwrap();
            }

            $(match tree.at($address) {
                Err(_) => {
                    $($( @$some )?
                        panic!("Expected a match for address '{}'", $address)
                    )?
                }
                Ok(result) => {
                    $($( @$some )?
                        if result.pattern != $pattern {
                            panic!(
                                "Wrong pattern for address '{}'. Expected '{}', found '{}'",
                                $address, $pattern, result.pattern
                            );
                        }

                        tree.at_mut($address).unwrap().value.push_str("CHECKED");
                        assert!(tree.at($address).unwrap().value.ends_with("CHECKED"));

                        let value = tree.at_mut($address).unwrap().value;
                        *value = value.replace("CHECKED", "");
                    )?

                    $($( @$none )?
                        panic!(
                            "Unexpected match for address '{}', got: {}",
                            $address, result.pattern
                        );
                    )?
                }
            })*

            if let Err(err) = tree.check_invariants() {
                panic!("invariant violated: {}", err)
            }
        }
   )* };
}

match_tests! {
    basic {
        patterns = [
            "/foo",
            "/barbie",
            "/food",
            "/bbq",
            "/barbeque",
            "/barby",
            "/baa",
        ],
        "/foo"      :: "/foo"      => Some,
        "/food"     :: "/food"     => Some,
        "/barbie"   :: "/barbie"   => Some,
        "/barby"    :: "/barby"    => Some,
        "/barbeque" :: "/barbeque" => Some,
        "/bbq"      :: "/bbq"      => Some,
        "/baa"      :: "/baa"      => Some,
        "/bar"      :: ""          => None,
        "/barb"     :: ""          => None,
        "/fo"       :: ""          => None,
        "/foods"    :: ""          => None,
        "/b"        :: ""          => None,
        "/zzz"      :: ""          => None,
        "bar"       :: ""          => None,
        "/"         :: ""          => None,
        ""          :: ""          => None,
    },
    split {
        patterns = ["/barbie", "/barby"],
        "/barb"   :: ""        => None,
        "/barbie" :: "/barbie" => Some,
        "/barby"  :: "/barby"  => Some,
    },
    nested_paths {
        patterns = [
            "/mixer/master/gain",
            "/mixer/master/mute",
            "/mixer/ch1/gain",
            "/mixer/ch2/gain",
            "/synth/osc1/freq",
            "/synth/osc1/wave",
        ],
        "/mixer/master/gain" :: "/mixer/master/gain" => Some,
        "/mixer/master/mute" :: "/mixer/master/mute" => Some,
        "/mixer/ch1/gain"    :: "/mixer/ch1/gain"    => Some,
        "/mixer/ch2/gain"    :: "/mixer/ch2/gain"    => Some,
        "/synth/osc1/wave"   :: "/synth/osc1/wave"   => Some,
        "/mixer/ch3/gain"    :: ""                   => None,
        "/mixer/master"      :: ""                   => None,
        "/mixer/"            :: ""                   => None,
        "/synth/osc1/freqs"  :: ""                   => None,
    },
    wildcard_in_address {
        patterns = ["/ab", "/mixer/ch1/gain"],
        "/a?"             :: "/ab"             => Some,
        "/??"             :: "/ab"             => Some,
        "/?b"             :: "/ab"             => Some,
        "/mixer/ch?/gain" :: "/mixer/ch1/gain" => Some,
        "/mixer/ch1/?ain" :: "/mixer/ch1/gain" => Some,
        "/a??"            :: ""                => None,
        "/?"              :: ""                => None,
    },
    wildcard_in_pattern {
        patterns = ["/a?", "/mixer/ch?/gain"],
        "/ab"              :: "/a?"             => Some,
        "/az"              :: "/a?"             => Some,
        "/a?"              :: "/a?"             => Some,
        "/mixer/ch7/gain"  :: "/mixer/ch?/gain" => Some,
        "/mixer/ch12/gain" :: ""                => None,
        "/abc"             :: ""                => None,
        "/b?"              :: ""                => None,
    },
    wildcard_sibling_backtracking {
        patterns = ["/x?z", "/abc"],
        "/abc" :: "/abc" => Some,
        "/xyz" :: "/x?z" => Some,
        "/x?z" :: "/x?z" => Some,
        "/abz" :: ""     => None,
    },
    brace_expansion {
        patterns = ["/{alpha,beta}/x"],
        "/alpha/x" :: "/alpha/x" => Some,
        "/beta/x"  :: "/beta/x"  => Some,
        "/gamma/x" :: ""         => None,
        "/alpha"   :: ""         => None,
        "/{alpha,beta}/x" :: ""  => None,
    },
    brace_expansion_shared_prefix {
        patterns = ["/{barbara,badass}/foo", "/barbie"],
        "/barbara/foo" :: "/barbara/foo" => Some,
        "/badass/foo"  :: "/badass/foo"  => Some,
        "/barbie"      :: "/barbie"      => Some,
        "/barbara"     :: ""             => None,
        "/ba"          :: ""             => None,
    },
    trailing_brace_group {
        patterns = ["/mixer/{1,2,3}"],
        "/mixer/1" :: "/mixer/1" => Some,
        "/mixer/2" :: "/mixer/2" => Some,
        "/mixer/3" :: "/mixer/3" => Some,
        "/mixer/4" :: ""         => None,
    },
    character_classes_are_literal {
        patterns = ["/synth/[abc]", "/glob*"],
        "/synth/[abc]" :: "/synth/[abc]" => Some,
        "/synth/a"     :: ""             => None,
        "/glob*"       :: "/glob*"       => Some,
        "/globbing"    :: ""             => None,
    },
    unicode {
        patterns = ["/ʯ", "/β", "/café/ø"],
        "/ʯ"      :: "/ʯ"      => Some,
        "/β"      :: "/β"      => Some,
        "/café/ø" :: "/café/ø" => Some,
        "/café"   :: ""        => None,
    },
}

#[test]
fn not_found_error() {
    let mut tree = PathTree::new();
    tree.insert("/foo", 1).unwrap();

    assert_eq!(tree.at("/bar").unwrap_err(), MatchError::NotFound);
    assert_eq!(tree.at("foo").unwrap_err(), MatchError::NotFound);
    assert!(tree.is_match("/foo"));
    assert!(!tree.is_match("/fo"));
}

#[test]
fn boolean_add() {
    let mut tree = PathTree::new();

    assert!(tree.add("/foo"));
    assert!(tree.add("/foo"));
    assert!(!tree.add("foo"));
    assert!(!tree.add("/{foo}"));

    assert_eq!(tree.len(), 1);
    assert!(tree.is_match("/foo"));
}

#[test]
fn display() {
    let mut tree = PathTree::new();
    tree.insert("/barbie", ()).unwrap();
    tree.insert("/barby", ()).unwrap();
    tree.insert("/bbq", ()).unwrap();

    assert_eq!(tree.to_string(), "b ¬\n bq •\n arb ¬\n  y •\n  ie •\n");
}
