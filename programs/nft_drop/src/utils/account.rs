use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Creates a program-owned PDA at an address derived outside the accounts
/// struct, paying rent from `payer`.
///
/// An address that already holds lamports cannot go through
/// `create_account`, so that branch tops the balance up to rent exemption
/// and then allocates and assigns with the PDA's signer seeds.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    new_account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(space);

    if new_account.lamports() == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::CreateAccount {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
                signer_seeds,
            ),
            required_lamports,
            space as u64,
            owner,
        );
    }

    let top_up = required_lamports.saturating_sub(new_account.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: payer.clone(),
                    to: new_account.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: new_account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Assign {
                account_to_assign: new_account.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

/// Writes an account struct (discriminator included) into a freshly created
/// PDA's data.
pub fn initialize_pda_data<'info, T: AccountSerialize>(
    state: &T,
    account: &AccountInfo<'info>,
) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut cursor = std::io::Cursor::new(&mut data[..]);
    state.try_serialize(&mut cursor)?;
    Ok(())
}
