//! ABI declarations of the indexed contracts
//!
//! Argument names are part of the ingestion contract: they become the keys of
//! the decoded [`ArgBag`](super::ArgBag) and must match the deployed ABIs verbatim.

use alloy::sol;

sol! {
    /// Singleton pool manager (Uniswap v4 layout, ERC-6909 claims, Ownable)
    #[derive(Debug, PartialEq)]
    interface IPoolManager {
        event Approval(address indexed owner, address indexed spender, uint256 indexed id, uint256 amount);
        event Donate(bytes32 indexed id, address indexed sender, uint256 amount0, uint256 amount1);
        event Initialize(
            bytes32 indexed id,
            address indexed currency0,
            address indexed currency1,
            uint24 fee,
            int24 tickSpacing,
            address hooks,
            uint160 sqrtPriceX96,
            int24 tick
        );
        event ModifyLiquidity(
            bytes32 indexed id,
            address indexed sender,
            int24 tickLower,
            int24 tickUpper,
            int256 liquidityDelta,
            bytes32 salt
        );
        event OperatorSet(address indexed owner, address indexed operator, bool approved);
        event OwnershipTransferred(address indexed user, address indexed newOwner);
        event ProtocolFeeControllerUpdated(address indexed protocolFeeController);
        event ProtocolFeeUpdated(bytes32 indexed id, uint24 protocolFee);
        event Swap(
            bytes32 indexed id,
            address indexed sender,
            int128 amount0,
            int128 amount1,
            uint160 sqrtPriceX96,
            uint128 liquidity,
            int24 tick,
            uint24 fee
        );
        event Transfer(
            address caller,
            address indexed from,
            address indexed to,
            uint256 indexed id,
            uint256 amount
        );
    }
}

sol! {
    /// Launchpad factory deploying fixed-supply tokens
    #[derive(Debug, PartialEq)]
    interface ITokenFactory {
        event TokenCreated(
            address indexed tokenAddress,
            address indexed creator,
            string name,
            string symbol,
            uint8 decimals,
            uint256 initialSupply,
            string description,
            string image,
            string website,
            string twitter,
            string telegram,
            string discord
        );
    }
}
