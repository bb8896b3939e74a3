// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{self, Write};

use num_bigint_dig::BigUint;
use textbook_rsa::{cipher, factor, Ciphertext, KeyPair};

const MENU: &str = "\nPlease choose an option from the menu:
  1. Generate RSA keys
  2. Encrypt a message
  3. Decrypt a message
  4. Break a key
  5. Exit";

/// One menu action. The shell is a plain dispatcher: every command reads
/// all of its inputs fresh and leaves nothing behind for the next one.
enum Command {
    GenerateKeys,
    Encrypt,
    Decrypt,
    Break,
    Exit,
}

impl Command {
    fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::GenerateKeys),
            "2" => Some(Self::Encrypt),
            "3" => Some(Self::Decrypt),
            "4" => Some(Self::Break),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn main() -> io::Result<()> {
    println!("=== Textbook RSA ===");
    println!("Key generation, per-character encryption, and the break that follows.");

    loop {
        println!("{MENU}");
        let Some(choice) = prompt("Enter your choice (1-5): ")? else {
            break;
        };

        match Command::parse(choice.trim()) {
            Some(Command::GenerateKeys) => generate_keys()?,
            Some(Command::Encrypt) => encrypt_message()?,
            Some(Command::Decrypt) => decrypt_message()?,
            Some(Command::Break) => break_key()?,
            Some(Command::Exit) => break,
            None => println!("\nInvalid choice. Please try again."),
        }
    }

    println!("\nExiting the program. Goodbye!");
    Ok(())
}

/// Prints `label` and reads one line. `None` means stdin is exhausted;
/// callers abandon their command and fall back to the menu, which then
/// exits on the same condition.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Reads a nonnegative integer. Unparseable input prints a complaint and
/// aborts the current command, like every other bad input here.
fn prompt_number(label: &str) -> io::Result<Option<BigUint>> {
    let Some(text) = prompt(label)? else {
        return Ok(None);
    };

    match text.trim().parse::<BigUint>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("\nInvalid input: {text:?} is not a nonnegative integer.\n");
            Ok(None)
        }
    }
}

fn generate_keys() -> io::Result<()> {
    println!("\n--- Generate RSA Keys ---");
    let Some(p) = prompt_number("Enter a prime number p: ")? else {
        return Ok(());
    };
    let Some(q) = prompt_number("Enter a prime number q: ")? else {
        return Ok(());
    };

    match KeyPair::from_primes(&p, &q) {
        Ok(pair) => {
            let public = pair.public_key();
            let secret = pair.private_key();
            println!("\nPublic Key (n, e): ({}, {})", public.n(), public.e());
            println!("Private Key (n, d): ({}, {})\n", secret.n(), secret.d());
        }
        Err(err) => println!("\nError: {err}\n"),
    }
    Ok(())
}

fn encrypt_message() -> io::Result<()> {
    println!("\n--- Encrypt Message ---");
    let Some(n) = prompt_number("Enter the modulus n (from the public key): ")? else {
        return Ok(());
    };
    let Some(e) = prompt_number("Enter the public exponent e (from the public key): ")? else {
        return Ok(());
    };
    let Some(message) = prompt("Enter the message to encrypt: ")? else {
        return Ok(());
    };

    match cipher::encrypt(&n, &e, &message) {
        Ok(encrypted) => println!("\nEncrypted Message: {encrypted}\n"),
        Err(err) => println!("\nError: {err}\n"),
    }
    Ok(())
}

fn decrypt_message() -> io::Result<()> {
    println!("\n--- Decrypt Message ---");
    let Some(n) = prompt_number("Enter the modulus n (from the private key): ")? else {
        return Ok(());
    };
    let Some(d) = prompt_number("Enter the private exponent d (from the private key): ")? else {
        return Ok(());
    };
    let Some(text) = prompt("Enter the encrypted message (as a comma-delimited list): ")? else {
        return Ok(());
    };

    let ciphertext = match text.parse::<Ciphertext>() {
        Ok(ciphertext) => ciphertext,
        Err(err) => {
            println!("\nError: {err}\n");
            return Ok(());
        }
    };

    match cipher::decrypt(&n, &d, &ciphertext) {
        Ok(message) => println!("\nDecrypted Message: {message}\n"),
        Err(err) => println!("\nError: {err}\n"),
    }
    Ok(())
}

fn break_key() -> io::Result<()> {
    println!("\n--- Break Code ---");
    let Some(text) =
        prompt("Enter the intercepted message (as a comma-delimited list, or blank): ")?
    else {
        return Ok(());
    };

    let intercepted = if text.trim().is_empty() {
        None
    } else {
        match text.parse::<Ciphertext>() {
            Ok(ciphertext) => Some(ciphertext),
            Err(err) => {
                println!("\nError: {err}\n");
                return Ok(());
            }
        }
    };

    let Some(n) = prompt_number("Enter the modulus n (from the public key): ")? else {
        return Ok(());
    };

    println!("\nAttempting to factorize n: {n}...");
    let Some((p, q)) = factor::factorize(&n) else {
        println!("Could not factorize n into two factors.\n");
        return Ok(());
    };
    println!("Factors of n: {p}, {q}");

    match KeyPair::from_primes(&p, &q) {
        Ok(pair) => {
            let public = pair.public_key();
            let secret = pair.private_key();
            println!("Recovered public key (n, e): ({}, {})", public.n(), public.e());
            println!("Recovered private key (n, d): ({}, {})", secret.n(), secret.d());

            match intercepted {
                Some(ciphertext) => match cipher::decrypt(secret.n(), secret.d(), &ciphertext) {
                    Ok(message) => println!("Decrypted Message: {message}\n"),
                    Err(err) => println!("Error decrypting the intercepted message: {err}\n"),
                },
                None => println!(),
            }
        }
        Err(err) => println!("Error in key recovery: {err}\n"),
    }
    Ok(())
}
