use std::{
	error::Error,
	io::{BufRead, Write},
};

use pocketcube::prelude::*;

const FACE_PROMPTS: [&str; 3] = [
	"the face oriented left or right: ",
	"the face oriented away or towards you: ",
	"the face oriented up or down: ",
];

fn print_instructions<W: Write>(out: &mut W) -> std::io::Result<()> {
	writeln!(out, "In a 2x2x2 cube, the cubelet positions are numbered as follows:")?;
	writeln!(out, "top layer      bottom layer")?;
	writeln!(out, "     12             78")?;
	writeln!(out, "     34             56")?;
	writeln!(
		out,
		"Hold the cube such that the cubelet colored white, blue and red is in position #1"
	)?;
	writeln!(out, "Please enter the colors of the faces of the other cubelets:")?;
	writeln!(
		out,
		"'r' for red, 'b' for blue, 'g' for green, 'o' for orange, 'y' for yellow, 'w' for white"
	)
}

/// Ask until a valid color was entered
fn read_color<R: BufRead, W: Write>(
	input: &mut R,
	out: &mut W,
	prompt: &str,
) -> Result<Color, Box<dyn Error>> {
	loop {
		write!(out, "{}", prompt)?;
		out.flush()?;

		let mut line = String::new();
		if input.read_line(&mut line)? == 0 {
			return Err("The input ended before the cube was complete".into());
		}

		let mut chars = line.trim().chars();
		if let (Some(c), None) = (chars.next(), chars.next()) {
			if let Ok(color) = Color::try_from(c) {
				return Ok(color);
			}
		}
	}
}

/// Enter the cube cubelet by cubelet
pub fn interactive_mode<R: BufRead, W: Write>(
	input: &mut R,
	out: &mut W,
) -> Result<PocketCube, Box<dyn Error>> {
	print_instructions(out)?;

	let mut colors = [[Color::White; 3]; NUM_CUBELETS];
	for (i, cubelet) in colors.iter_mut().enumerate() {
		writeln!(out, "Cubelet #{}", i + 2)?;
		for (face, prompt) in cubelet.iter_mut().zip(FACE_PROMPTS) {
			*face = read_color(input, out, prompt)?;
		}
	}

	let cube = PocketCube::from_colors(colors)?;
	writeln!(out, "You have entered the state {}", cube)?;
	Ok(cube)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	/// Invalid answers are asked again
	fn enter_goal() -> Result<(), Box<dyn Error>> {
		let answers = "g\nr\nw\nb\no\nw\ng\no\nw\nx\nblue\nb\no\ny\ng\no\ny\nb\nR\ny\ng\nr\ny\n";
		let mut out = vec![];

		let cube = interactive_mode(&mut answers.as_bytes(), &mut out)?;
		assert_eq!(cube, GOAL);
		Ok(())
	}

	#[test]
	fn input_ends_early() {
		let mut out = vec![];
		assert!(interactive_mode(&mut "g\nr\n".as_bytes(), &mut out).is_err());
	}
}
