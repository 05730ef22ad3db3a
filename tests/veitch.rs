use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use test_log::test;

use qmc_rs::dnf::Dnf;
use qmc_rs::implicant::Implicant;
use qmc_rs::qmc::minimize;
use qmc_rs::veitch::{Cell, VeitchDiagram};

fn random_function(rng: &mut ChaCha8Rng, n: u32) -> (Dnf, Dnf) {
    let mut f = Dnf::new();
    let mut d = Dnf::new();
    for i in 0..1u64 << n {
        let minterm = Implicant::from_index(i, n).unwrap();
        match rng.random_range(0..6) {
            0..=2 => {}
            3 | 4 => {
                f.insert(minterm);
            }
            _ => {
                d.insert(minterm);
            }
        }
    }
    (f, d)
}

#[test]
fn test_five_variable_picture() {
    let (f, n) = Dnf::parse("A'CE+ABDE'+AB'C'E+ACE+ABDE+AB'D'E'", None).unwrap();
    let diagram = VeitchDiagram::build(n, &f, &Dnf::new(), true).unwrap();
    assert_eq!(diagram.contours().len(), 4);
    let expected = [
        "            B                               B                            ",
        "     ------- -------                 ------- -------                     ",
        "    +-------+-------+-------+-------+-------+-------+-------+-------+    ",
        "  | |       | +-------+---+-------+ |       |       | +-----------+ |    ",
        "  | |   0   | | 1   | | 1 | |   1 | |   0   |   0   | | 1   |   1 | |    ",
        "  | |       | |     | +---+-------+ |       |       | +-----------+ |    ",
        "A   +-------+-|-----+-|---|-+-----|-+-------+-------+-------+-------+    ",
        "  | | +-------+---+ | |   | |     | | +-----------+ |       |       | |  ",
        "  | | | 1   | | 1 | | | 1 | |   1 | | | 1   |   1 | |   0   |   0   | |  ",
        "  | | +-------+---+ | +---+-------+ | +-----------+ |       |       | |  ",
        "    +-------+-|-----+-----|-+-------+-------+-------+-------+-------+   D",
        "    |       | |     |     | |       |       |       |       |       | |  ",
        "    |   0   | | 1   |   1 | |   0   |   0   |   0   |   0   |   0   | |  ",
        "    |       | |     |     | |       |       |       |       |       | |  ",
        "    +-------+-|-----+-----|-+-------+-------+-------+-------+-------+    ",
        "    |       | |     |     | |       |       |       |       |       |    ",
        "    |   0   | | 1   |   1 | |   0   |   0   |   0   |   0   |   0   |    ",
        "    |       | +-----------+ |       |       |       |       |       |    ",
        "    +-------+-------+-------+-------+-------+-------+-------+-------+    ",
        "             ------- -------                 ------- -------             ",
        "                    C                               C                    ",
        "     ------- ------- ------- -------                                     ",
        "                    E                                                    ",
    ]
    .join("\n");
    assert_eq!(diagram.to_string(), expected);
}

#[test]
fn test_cells_follow_the_function() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for n in 1..=5 {
        for _ in 0..10 {
            let (f, d) = random_function(&mut rng, n);
            let diagram = VeitchDiagram::build(n, &f, &d, false).unwrap();
            for row in 0..diagram.height() {
                for column in 0..diagram.width() {
                    let minterm = diagram.minterm_at(row, column);
                    let expected = if f.contains(&minterm) && !d.contains(&minterm) {
                        Cell::One
                    } else if d.contains(&minterm) {
                        Cell::DontCare
                    } else {
                        Cell::Zero
                    };
                    assert_eq!(diagram.cell(row, column), expected, "{} in {} / {}", minterm, f, d);
                }
            }
        }
    }
}

#[test]
fn test_minimized_contours() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for n in 2..=4 {
        for _ in 0..10 {
            let (f, d) = random_function(&mut rng, n);
            let diagram = VeitchDiagram::build(n, &f, &d, true).unwrap();
            let mdnf = minimize(n, &f, &d).unwrap().into_iter().next().unwrap_or_default();

            let terms: Vec<_> = mdnf.iter().filter(|term| !d.contains(term)).collect();
            assert_eq!(diagram.contours().len(), terms.len());
            for (contour, term) in diagram.contours().iter().zip(terms) {
                assert_eq!(contour, &diagram.contour_of(term));
            }

            for row in 0..diagram.height() {
                for column in 0..diagram.width() {
                    let minterm = diagram.minterm_at(row, column);
                    let cell = diagram.cell(row, column);
                    if f.contains(&minterm) && !d.contains(&minterm) {
                        assert_eq!(cell, Cell::One);
                    }
                    if cell == Cell::One {
                        assert!(f.contains(&minterm) || d.contains(&minterm));
                    }
                }
            }
        }
    }
}

#[test]
fn test_render_shape() {
    let expected = [(1, 9, 13), (2, 11, 21), (3, 13, 37), (4, 21, 41), (5, 23, 73)];
    for (n, lines, columns) in expected {
        let text = VeitchDiagram::new(n).unwrap().to_string();
        assert_eq!(text.lines().count(), lines, "n = {}", n);
        assert!(text.lines().all(|line| line.chars().count() == columns), "n = {}", n);
        assert_eq!(text.chars().filter(|&c| c == '0').count(), 1 << n);
    }
}
